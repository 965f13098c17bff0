use crate::form::payload::FormPayload;

#[derive(Debug)]
pub enum Action {
    Submit { payload: FormPayload },
    ScheduleRedraw,
    Quit,
}

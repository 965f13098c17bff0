use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::config::FieldKind;
use crate::form::controller::{FormError, SubmitStart};
use crate::logging::JournalEntry;
use crate::transport::{InquiryResponse, TransportError};
use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::SubmissionSettled(result) => {
            let detail = journal_detail(&result);
            let notice = state.form.settle(result);
            if let Some(settlement) = state.form.last_settlement() {
                state.journal_entries.push(JournalEntry {
                    timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                    settlement,
                    detail,
                });
            }
            state.notice = Some(notice);
            state.status_message = None;
            state.dirty = true;
            vec![]
        }
        AppEvent::HealthChecked(result) => {
            state.server = match result {
                Ok(health) => {
                    info!(status = %health.status, "health probe succeeded");
                    ServerStatus::Online(health)
                }
                Err(e) => {
                    warn!(error = %e, "health probe failed");
                    ServerStatus::Offline
                }
            };
            state.dirty = true;
            vec![]
        }
        AppEvent::CompanyInfoLoaded(result) => {
            match result {
                Ok(info) => state.company = Some(info),
                Err(e) => warn!(error = %e, "company info unavailable"),
            }
            state.dirty = true;
            vec![]
        }
        AppEvent::Redraw => {
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            if state.back_to_top.flush(state.scroll_offset) {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn journal_detail(result: &Result<InquiryResponse, TransportError>) -> String {
    match result {
        Ok(response @ InquiryResponse::Accepted(_)) => response
            .inquiry_id()
            .map(|id| format!("inquiry_id={}", id))
            .unwrap_or_default(),
        Ok(InquiryResponse::Rejected { status, error }) => {
            format!("status={} error={}", status, error)
        }
        Err(e) => format!("error={}", e),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        // Redraw once the burst settles
        CEvent::Resize(_, _) => vec![Action::ScheduleRedraw],
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // A notice is modal until dismissed
    if state.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.notice = None;
        }
        return vec![];
    }

    // Any key closes the menu without acting
    if state.menu_open {
        state.menu_open = false;
        return vec![];
    }

    match key.code {
        KeyCode::F(1) => {
            state.menu_open = true;
            vec![]
        }
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('s') if ctrl => submit(state),
        KeyCode::Char('t') if ctrl => {
            state.back_to_top();
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus_prev();
            vec![]
        }
        KeyCode::Enter if state.focus == Focus::Submit => submit(state),
        KeyCode::Char(' ') if state.focus == Focus::Submit => submit(state),
        KeyCode::Enter if state.focused_field_kind() == Some(&FieldKind::Multiline) => {
            edit_focused_field(state, key, ctrl);
            vec![]
        }
        KeyCode::Enter => {
            state.focus_next();
            vec![]
        }
        _ => {
            edit_focused_field(state, key, ctrl);
            vec![]
        }
    }
}

fn edit_focused_field(state: &mut AppState, key: KeyEvent, ctrl: bool) {
    let Some(field) = state.focused_field_mut() else {
        return;
    };
    match field.kind {
        FieldKind::Toggle => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
                field.toggle();
            }
        }
        FieldKind::Select { .. } => match key.code {
            KeyCode::Right | KeyCode::Char(' ') => field.cycle_option(true),
            KeyCode::Left => field.cycle_option(false),
            _ => {}
        },
        FieldKind::Multiline if key.code == KeyCode::Enter => field.input.insert_char('\n'),
        FieldKind::Text | FieldKind::Multiline => match key.code {
            KeyCode::Char('w') if ctrl => field.input.delete_word_back(),
            KeyCode::Char(c) if !ctrl => field.input.insert_char(c),
            KeyCode::Backspace => field.input.delete_back(),
            KeyCode::Delete => field.input.delete_forward(),
            KeyCode::Left => field.input.move_left(),
            KeyCode::Right => field.input.move_right(),
            KeyCode::Home => field.input.move_home(),
            KeyCode::End => field.input.move_end(),
            _ => {}
        },
    }
}

fn submit(state: &mut AppState) -> Vec<Action> {
    match state.form.begin_submit() {
        Ok(SubmitStart::Invalid(notice)) => {
            if let Some(first) = state.form.fields.iter().position(|f| f.invalid) {
                state.focus_field(first);
            }
            state.notice = Some(notice);
            vec![]
        }
        Ok(SubmitStart::Started(payload)) => {
            state.status_message = None;
            vec![Action::Submit { payload }]
        }
        Err(FormError::AlreadySubmitting) => {
            state.status_message = Some(state.config.messages.already_submitting.clone());
            vec![]
        }
    }
}

mod form_view;
mod header;
pub mod layout;
mod overlay;
mod side_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    form_view::render(frame, app_layout.form, state);
    side_panel::render(frame, app_layout.side_panel, state);
    status_bar::render(frame, app_layout.status_bar, state);
    overlay::render(frame, state);
}

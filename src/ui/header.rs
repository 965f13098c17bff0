use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let line = Line::from(vec![
        Span::styled(" ✉ ", Theme::header()),
        Span::styled(state.config.ui.title.as_str(), Theme::header()),
        Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED)),
        Span::styled(
            state.config.endpoint.url(&state.config.endpoint.inquiry_path),
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(bg), area);
}

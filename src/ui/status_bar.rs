use crate::app::state::*;
use crate::ui::theme::Theme;
use crate::util::format::format_date;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Server health
    let (marker, style) = match state.server {
        ServerStatus::Online(_) => (" ● ", Theme::server_online()),
        ServerStatus::Offline => (" ● ", Theme::server_offline()),
        ServerStatus::Unknown => (" ○ ", Theme::server_unknown()),
    };
    parts.push(Span::styled(marker, style));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    if state.form.is_submitting() {
        parts.push(Span::styled(
            format!(" | {} ", state.form.control().label()),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    // Date and focus indicator on the right
    let focus_name = match state.focus {
        Focus::Field(i) => state
            .form
            .fields
            .get(i)
            .map(|f| f.label.clone())
            .unwrap_or_default(),
        Focus::Submit => "SUBMIT".to_string(),
    };
    let right = format!(
        " {} [{}] ",
        format_date(&chrono::Local::now().date_naive()),
        focus_name
    );

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        right,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}

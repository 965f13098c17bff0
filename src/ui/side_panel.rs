use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Company ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let lines: Vec<Line> = match (&state.company, &state.server) {
        (Some(info), _) => info
            .entries()
            .into_iter()
            .flat_map(|(label, value)| {
                [
                    Line::from(Span::styled(label, Theme::label())),
                    Line::from(Span::styled(format!("  {}", value), Theme::input_text())),
                ]
            })
            .collect(),
        (None, ServerStatus::Unknown) => {
            vec![Line::from(Span::styled(" Loading...", Theme::placeholder()))]
        }
        (None, _) => vec![Line::from(Span::styled(" Unavailable", Theme::placeholder()))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

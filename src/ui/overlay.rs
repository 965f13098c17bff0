use crate::app::state::AppState;
use crate::form::controller::NoticeKind;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const KEY_HELP: &[(&str, &str)] = &[
    ("Tab / ↓", "next field"),
    ("Shift-Tab / ↑", "previous field"),
    ("Enter", "next field / newline in message"),
    ("Ctrl-S", "submit"),
    ("Space", "toggle / next option"),
    ("← →", "move cursor / cycle option"),
    ("Ctrl-W", "delete word"),
    ("Ctrl-T", "back to top"),
    ("F1", "this menu"),
    ("Esc", "close notice / quit"),
];

/// Centered popup rect, clamped to the screen.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4)).max(1);
    let h = height.min(area.height.saturating_sub(2)).max(1);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    if let Some(notice) = &state.notice {
        render_notice(frame, notice.kind, &notice.text);
    } else if state.menu_open {
        render_menu(frame);
    }
}

fn render_notice(frame: &mut Frame, kind: NoticeKind, text: &str) {
    let title = match kind {
        NoticeKind::Success => " ✔ ",
        NoticeKind::Warning => " ! ",
        NoticeKind::Error => " ✖ ",
    };
    let area = popup_area(frame.area(), 56, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(" Enter ").right_aligned())
        .title_style(Theme::notice(kind))
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::notice(kind))
        .style(Style::default().bg(Theme::BG_ELEVATED));
    let paragraph = Paragraph::new(text)
        .style(Theme::input_text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_menu(frame: &mut Frame) {
    let area = popup_area(frame.area(), 52, KEY_HELP.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = KEY_HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<15}", keys), Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(*what, Theme::input_text()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_ELEVATED));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use crate::app::state::*;
use crate::config::FieldKind;
use crate::form::field::Field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.config.ui.title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let overlay_open = state.notice.is_some() || state.menu_open;
    let top = state.scroll_offset;
    let bottom = top + inner.height;
    let mut row: u16 = 0;

    for (i, field) in state.form.fields.iter().enumerate() {
        let height = field_height(field);
        if row >= top && row + height <= bottom {
            let rect = Rect::new(inner.x, inner.y + row - top, inner.width, height);
            let focused = state.focus == Focus::Field(i);
            render_field(frame, rect, field, focused, focused && !overlay_open);
        }
        row += height;
    }

    if row >= top && row + BUTTON_HEIGHT <= bottom {
        let rect = Rect::new(inner.x, inner.y + row - top, inner.width, BUTTON_HEIGHT);
        render_button(frame, rect, state);
    }

    if state.back_to_top.visible {
        let text = " Ctrl-T ↑ top ";
        let width = text.chars().count() as u16;
        if area.width > width + 2 {
            let badge = Rect::new(
                area.right() - width - 2,
                area.bottom().saturating_sub(1),
                width,
                1,
            );
            frame.render_widget(Paragraph::new(text).style(Theme::badge()), badge);
        }
    }
}

fn render_field(frame: &mut Frame, area: Rect, field: &Field, focused: bool, show_cursor: bool) {
    let border_style = if field.invalid {
        Theme::field_invalid()
    } else if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::label() })
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &field.kind {
        FieldKind::Text => {
            // Keep the cursor column inside the box
            let column = field.input.cursor_column() as u16;
            let offset = if focused {
                column.saturating_sub(inner.width.saturating_sub(1))
            } else {
                0
            };
            let paragraph = Paragraph::new(field.value())
                .style(Theme::input_text())
                .scroll((0, offset));
            frame.render_widget(paragraph, inner);
            if show_cursor && inner.width > 0 && inner.height > 0 {
                frame.set_cursor_position((inner.x + column - offset, inner.y));
            }
        }
        FieldKind::Multiline => {
            let (row, column) = wrapped_cursor(&field.value()[..field.input.cursor], inner.width);
            let offset = if focused {
                row.saturating_sub(inner.height.saturating_sub(1))
            } else {
                0
            };
            let lines: Vec<Line> = wrap_lines(field.value(), inner.width)
                .into_iter()
                .map(Line::from)
                .collect();
            let paragraph = Paragraph::new(lines)
                .style(Theme::input_text())
                .scroll((offset, 0));
            frame.render_widget(paragraph, inner);
            if show_cursor && inner.width > 0 && inner.height > 0 {
                frame.set_cursor_position((inner.x + column, inner.y + row - offset));
            }
        }
        FieldKind::Select { .. } => {
            let line = if field.value().is_empty() {
                Line::from(vec![
                    Span::styled("‹ ", Theme::label()),
                    Span::styled("선택", Theme::placeholder()),
                    Span::styled(" ›", Theme::label()),
                ])
            } else {
                Line::from(vec![
                    Span::styled("‹ ", Theme::label()),
                    Span::styled(field.value(), Theme::input_text()),
                    Span::styled(" ›", Theme::label()),
                ])
            };
            frame.render_widget(Paragraph::new(line), inner);
        }
        FieldKind::Toggle => {
            let mark = if field.value() == "true" { "[x]" } else { "[ ]" };
            let line = Line::from(vec![
                Span::styled(mark, Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(" Space to toggle", Theme::label()),
            ]);
            frame.render_widget(Paragraph::new(line), inner);
        }
    }
}

/// Split `text` into display rows: hard breaks on `'\n'`, and a new row
/// whenever the next character would pass `width` columns.
fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = vec![String::new()];
    let mut column = 0;
    for c in text.chars() {
        if c == '\n' {
            lines.push(String::new());
            column = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if column + w > width {
            lines.push(String::new());
            column = 0;
        }
        if let Some(line) = lines.last_mut() {
            line.push(c);
        }
        column += w;
    }
    lines
}

/// Row and column just after `before` once laid out by [`wrap_lines`].
fn wrapped_cursor(before: &str, width: u16) -> (u16, u16) {
    let lines = wrap_lines(before, width);
    let row = lines.len().saturating_sub(1) as u16;
    let column = lines.last().map(|l| l.width()).unwrap_or(0) as u16;
    if column >= width {
        (row + 1, 0)
    } else {
        (row, column)
    }
}

fn render_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let control = state.form.control();
    let focused = state.focus == Focus::Submit;
    let style = if !control.is_enabled() {
        Theme::button_disabled()
    } else if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };

    let width = (control.label().chars().count() as u16 + 6).min(area.width);
    let rect = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let paragraph = Paragraph::new(control.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(block);
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, state)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_required_marker_and_toggle() {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport_height(40);
        let screen = rendered(&state, 60, 42);
        assert!(screen.contains("Contact"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("*"));
    }

    #[test]
    fn test_invalid_field_gets_red_border() {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport_height(40);
        state.form.fields[0].invalid = true;

        let mut terminal = Terminal::new(TestBackend::new(60, 42)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &state)
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        // Top-left corner of the first field box, inside the panel border
        assert_eq!(buffer[(1, 1)].fg, Theme::INVALID_RED);
        // Second field keeps the normal border
        assert_eq!(buffer[(1, 4)].fg, Theme::BORDER_DIM);
    }

    #[test]
    fn test_wrap_lines_breaks_on_newline_and_width() {
        assert_eq!(wrap_lines("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_lines("abcdef", 4), vec!["abcd", "ef"]);
        // Hangul is two columns wide
        assert_eq!(wrap_lines("가나다", 4), vec!["가나", "다"]);
        assert_eq!(wrapped_cursor("a\nbc", 10), (1, 2));
        assert_eq!(wrapped_cursor("abcd", 4), (1, 0));
        assert_eq!(wrapped_cursor("", 4), (0, 0));
    }

    #[test]
    fn test_message_lines_render_on_separate_rows() {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport_height(40);
        let message = state
            .form
            .fields
            .iter()
            .position(|f| f.name == "message")
            .unwrap();
        state.form.fields[message].set_value("first\nsecond");
        state.focus_field(message);

        let mut terminal = Terminal::new(TestBackend::new(60, 42)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &state)
            })
            .unwrap();
        let cursor = terminal.get_cursor_position().unwrap();

        let screen = rendered(&state, 60, 42);
        let rows: Vec<&str> = screen.lines().collect();
        let first = rows.iter().position(|r| r.contains("first")).unwrap();
        assert!(rows[first + 1].contains("second"));
        assert!(!rows[first].contains("second"));
        // Cursor sits after "second", one row below "first"
        assert_eq!(cursor.y as usize, first + 1);
        assert_eq!(cursor.x, 1 + 1 + 1 + "second".len() as u16);
    }

    #[test]
    fn test_long_text_scrolls_to_keep_cursor_visible() {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport_height(40);
        let value = format!("{}@example.com", "a".repeat(40));
        state.form.fields[1].set_value(&value);
        state.focus_field(1);

        let mut terminal = Terminal::new(TestBackend::new(40, 42)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &state)
            })
            .unwrap();
        let cursor = terminal.get_cursor_position().unwrap();

        let screen = rendered(&state, 40, 42);
        assert!(screen.contains("@example.com"));
        // Panel border, field border and padding leave 34 text columns;
        // the cursor sits on the last one
        assert_eq!(cursor.x, 3 + 33);
    }
}

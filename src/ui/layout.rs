use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub side_panel: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Horizontal: form | gap | side panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(30),    // Form
            Constraint::Length(34), // Company info
        ])
        .split(content);

    AppLayout {
        header,
        form: h_chunks[0],
        side_panel: h_chunks[1],
        status_bar,
    }
}

/// Rows available to form content inside the form panel's borders.
pub fn form_viewport_height(area: Rect) -> u16 {
    compute_layout(area).form.height.saturating_sub(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.form.height, 28);
        assert_eq!(layout.side_panel.width, 34);
        assert_eq!(form_viewport_height(Rect::new(0, 0, 100, 30)), 26);
    }
}

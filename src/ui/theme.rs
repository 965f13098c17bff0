use crate::form::controller::NoticeKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 234, 212);
    pub const BG_ELEVATED: Color = Color::Rgb(30, 34, 42);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 88);
    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 134, 146);
    pub const INVALID_RED: Color = Color::Rgb(239, 68, 68);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    /// Border for a required field that failed validation.
    pub fn field_invalid() -> Style {
        Style::default().fg(Self::INVALID_RED)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_focused() -> Style {
        Self::button().add_modifier(Modifier::REVERSED)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }

    pub fn badge() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn notice(kind: NoticeKind) -> Style {
        match kind {
            NoticeKind::Success => Style::default().fg(Color::Green),
            NoticeKind::Warning => Style::default().fg(Color::Yellow),
            NoticeKind::Error => Style::default().fg(Self::INVALID_RED),
        }
    }

    pub fn server_online() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn server_offline() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray)
    }

    pub fn server_unknown() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }
}

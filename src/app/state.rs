use crate::config::{AppConfig, FieldKind};
use crate::form::controller::{FormController, Notice};
use crate::form::field::Field;
use crate::logging::JournalEntry;
use crate::transport::{CompanyInfo, HealthStatus};
use crate::util::throttle::Throttle;
use std::time::Duration;

pub const BUTTON_HEIGHT: u16 = 3;

/// Rows a field occupies in the form view, borders included.
pub fn field_height(field: &Field) -> u16 {
    match field.kind {
        FieldKind::Multiline => 5,
        _ => 3,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerStatus {
    Unknown,
    Online(HealthStatus),
    Offline,
}

/// Back-to-top badge: shown once the form has scrolled past `threshold` rows.
/// Visibility updates are throttled; a skipped update is applied on the next
/// tick so the badge never stays stale.
#[derive(Debug)]
pub struct BackToTop {
    pub threshold: u16,
    pub visible: bool,
    throttle: Throttle,
    stale: bool,
}

impl BackToTop {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            visible: false,
            throttle: Throttle::new(Duration::from_millis(100)),
            stale: false,
        }
    }

    pub fn on_scroll(&mut self, offset: u16) {
        let threshold = self.threshold;
        match self.throttle.run(|| offset > threshold) {
            Some(visible) => {
                self.visible = visible;
                self.stale = false;
            }
            None => self.stale = true,
        }
    }

    /// Apply a dropped update. Returns true when visibility changed.
    pub fn flush(&mut self, offset: u16) -> bool {
        if !self.stale {
            return false;
        }
        self.stale = false;
        let visible = offset > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub form: FormController,
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub menu_open: bool,
    pub scroll_offset: u16,
    pub viewport_height: u16,
    pub back_to_top: BackToTop,
    pub server: ServerStatus,
    pub company: Option<CompanyInfo>,
    pub status_message: Option<String>,
    pub journal_entries: Vec<JournalEntry>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let form = FormController::new(&config.form.fields, config.messages.clone());
        let focus = if form.fields.is_empty() {
            Focus::Submit
        } else {
            Focus::Field(0)
        };
        let back_to_top = BackToTop::new(config.ui.back_to_top_threshold);
        Self {
            config,
            form,
            focus,
            notice: None,
            menu_open: false,
            scroll_offset: 0,
            viewport_height: 0,
            back_to_top,
            server: ServerStatus::Unknown,
            company: None,
            status_message: None,
            journal_entries: Vec::new(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut Field> {
        match self.focus {
            Focus::Field(i) => self.form.fields.get_mut(i),
            Focus::Submit => None,
        }
    }

    pub fn focused_field_kind(&self) -> Option<&FieldKind> {
        match self.focus {
            Focus::Field(i) => self.form.fields.get(i).map(|f| &f.kind),
            Focus::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.form.fields.len();
        self.focus = match self.focus {
            Focus::Field(i) if i + 1 < count => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Submit,
            Focus::Submit if count > 0 => Focus::Field(0),
            Focus::Submit => Focus::Submit,
        };
        self.ensure_focus_visible();
    }

    pub fn focus_prev(&mut self) {
        let count = self.form.fields.len();
        self.focus = match self.focus {
            Focus::Field(0) => Focus::Submit,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Submit if count > 0 => Focus::Field(count - 1),
            Focus::Submit => Focus::Submit,
        };
        self.ensure_focus_visible();
    }

    pub fn focus_field(&mut self, index: usize) {
        if index < self.form.fields.len() {
            self.focus = Focus::Field(index);
            self.ensure_focus_visible();
        }
    }

    pub fn back_to_top(&mut self) {
        self.focus = if self.form.fields.is_empty() {
            Focus::Submit
        } else {
            Focus::Field(0)
        };
        self.set_scroll(0);
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        if height != self.viewport_height {
            self.viewport_height = height;
            self.ensure_focus_visible();
        }
    }

    /// Row span `(top, height)` of the focused element within the form content.
    fn focus_span(&self) -> (u16, u16) {
        let fields = &self.form.fields;
        match self.focus {
            Focus::Field(i) => {
                let top = fields.iter().take(i).map(field_height).sum();
                let height = fields.get(i).map(field_height).unwrap_or(0);
                (top, height)
            }
            Focus::Submit => (fields.iter().map(field_height).sum(), BUTTON_HEIGHT),
        }
    }

    /// Scroll just enough to bring the focused element into view.
    pub fn ensure_focus_visible(&mut self) {
        let (top, height) = self.focus_span();
        let mut offset = self.scroll_offset;
        if top < offset {
            offset = top;
        } else if self.viewport_height > 0 && top + height > offset + self.viewport_height {
            offset = (top + height).saturating_sub(self.viewport_height);
        }
        self.set_scroll(offset);
    }

    fn set_scroll(&mut self, offset: u16) {
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.back_to_top.on_scroll(offset);
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let server = match &self.server {
            ServerStatus::Unknown => "checking...".to_string(),
            ServerStatus::Online(health) => match &health.version {
                Some(v) => format!("{} v{}", health.status, v),
                None => health.status.clone(),
            },
            ServerStatus::Offline => "offline".to_string(),
        };
        format!("{} | {}", self.config.endpoint.base_url, server)
    }
}

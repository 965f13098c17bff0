use crate::config::{Coercion, FieldConfig, FieldKind};
use crate::form::input::InputBuffer;

/// A live form field: its declaration plus the value being edited and the
/// validation marker.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub coerce: Coercion,
    pub default: String,
    pub input: InputBuffer,
    pub invalid: bool,
}

impl Field {
    pub fn from_config(cfg: &FieldConfig) -> Self {
        Self {
            name: cfg.name.clone(),
            label: cfg.label.clone(),
            kind: cfg.kind.clone(),
            required: cfg.required,
            coerce: cfg.coerce,
            default: cfg.default.clone(),
            input: InputBuffer::new(&cfg.default),
            invalid: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.input.text
    }

    pub fn set_value(&mut self, value: &str) {
        self.input.set_text(value);
    }

    pub fn is_editable_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Multiline)
    }

    /// Restore the declared default. Invalid markers are left for the next
    /// validation pass to recompute.
    pub fn reset(&mut self) {
        self.input.set_text(&self.default);
    }

    /// Flip a toggle between `"true"` and `"false"`. No-op for other kinds.
    pub fn toggle(&mut self) {
        if self.kind == FieldKind::Toggle {
            let next = if self.value() == "true" { "false" } else { "true" };
            self.input.set_text(next);
        }
    }

    /// Step through select options; wraps at both ends. No-op for other kinds.
    pub fn cycle_option(&mut self, forward: bool) {
        let FieldKind::Select { options } = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|o| o == self.value())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else if current == 0 {
            options.len() - 1
        } else {
            current - 1
        };
        let value = options[next].clone();
        self.input.set_text(&value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_field() -> Field {
        Field::from_config(&FieldConfig {
            name: "service".into(),
            label: "Service".into(),
            kind: FieldKind::Select {
                options: vec!["".into(), "a".into(), "b".into()],
            },
            required: false,
            coerce: Coercion::Text,
            default: String::new(),
        })
    }

    #[test]
    fn test_cycle_option_wraps() {
        let mut field = select_field();
        field.cycle_option(true);
        assert_eq!(field.value(), "a");
        field.cycle_option(true);
        field.cycle_option(true);
        assert_eq!(field.value(), "");
        field.cycle_option(false);
        assert_eq!(field.value(), "b");
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut field = Field::from_config(&FieldConfig {
            name: "is_public".into(),
            label: "Public".into(),
            kind: FieldKind::Toggle,
            required: false,
            coerce: Coercion::Bool,
            default: "true".into(),
        });
        field.toggle();
        assert_eq!(field.value(), "false");
        field.toggle();
        assert_eq!(field.value(), "true");
        field.toggle();
        field.reset();
        assert_eq!(field.value(), "true");
    }

    #[test]
    fn test_toggle_ignores_text_fields() {
        let mut field = select_field();
        field.toggle();
        assert_eq!(field.value(), "");
    }
}

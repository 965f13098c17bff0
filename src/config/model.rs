//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            form: FormConfig::default(),
            messages: MessagesConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where the website's API lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Scheme and host, without a trailing slash (e.g. `"https://example.com"`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_inquiry_path")]
    pub inquiry_path: String,
    #[serde(default = "default_health_path")]
    pub health_path: String,
    #[serde(default = "default_company_info_path")]
    pub company_info_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            inquiry_path: default_inquiry_path(),
            health_path: default_health_path(),
            company_info_path: default_company_info_path(),
        }
    }
}

impl EndpointConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// The fields of the contact form, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
        }
    }
}

/// Declaration of a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Key used in the submitted JSON payload.
    pub name: String,
    /// Label shown next to the field.
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub coerce: Coercion,
    /// Value the field starts with and is reset to after a successful submit.
    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FieldKind {
    #[default]
    Text,
    Multiline,
    Select {
        options: Vec<String>,
    },
    Toggle,
}

/// How a raw field value is mapped into the JSON payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coercion {
    #[default]
    Text,
    /// `true` exactly when the raw value is `"true"`.
    Bool,
}

/// User-facing notice texts. Defaults are Korean, matching the website.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_required_missing")]
    pub required_missing: String,
    #[serde(default = "default_submit_success")]
    pub submit_success: String,
    #[serde(default = "default_submit_failure")]
    pub submit_failure: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    #[serde(default = "default_submitting_label")]
    pub submitting_label: String,
    #[serde(default = "default_already_submitting")]
    pub already_submitting: String,
    #[serde(default = "default_inquiry_number")]
    pub inquiry_number: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            required_missing: default_required_missing(),
            submit_success: default_submit_success(),
            submit_failure: default_submit_failure(),
            submit_label: default_submit_label(),
            submitting_label: default_submitting_label(),
            already_submitting: default_already_submitting(),
            inquiry_number: default_inquiry_number(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Scroll offset (in rows) past which the back-to-top badge is shown.
    #[serde(default = "default_back_to_top_threshold")]
    pub back_to_top_threshold: u16,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            back_to_top_threshold: default_back_to_top_threshold(),
            resize_debounce_ms: default_resize_debounce_ms(),
        }
    }
}

/// Diagnostics log and submission journal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub journal: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            level: default_level(),
            journal: false,
        }
    }
}

fn default_fields() -> Vec<FieldConfig> {
    fn text(name: &str, label: &str, required: bool) -> FieldConfig {
        FieldConfig {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Text,
            required,
            coerce: Coercion::Text,
            default: String::new(),
        }
    }

    vec![
        text("name", "이름", true),
        text("email", "이메일", true),
        text("phone", "연락처", false),
        text("company", "회사명", false),
        FieldConfig {
            name: "service_interest".into(),
            label: "관심 서비스".into(),
            kind: FieldKind::Select {
                options: vec![
                    String::new(),
                    "consulting".into(),
                    "development".into(),
                    "maintenance".into(),
                    "other".into(),
                ],
            },
            required: false,
            coerce: Coercion::Text,
            default: String::new(),
        },
        FieldConfig {
            name: "message".into(),
            label: "문의 내용".into(),
            kind: FieldKind::Multiline,
            required: true,
            coerce: Coercion::Text,
            default: String::new(),
        },
        FieldConfig {
            name: "is_public".into(),
            label: "공개 문의".into(),
            kind: FieldKind::Toggle,
            required: false,
            coerce: Coercion::Bool,
            default: "true".into(),
        },
    ]
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_inquiry_path() -> String {
    "/api/inquiry".to_string()
}
fn default_health_path() -> String {
    "/health".to_string()
}
fn default_company_info_path() -> String {
    "/api/company-info".to_string()
}
fn default_required_missing() -> String {
    "필수 항목을 모두 입력해주세요.".to_string()
}
fn default_submit_success() -> String {
    "문의가 성공적으로 전송되었습니다.".to_string()
}
fn default_submit_failure() -> String {
    "문의 전송 중 오류가 발생했습니다".to_string()
}
fn default_submit_label() -> String {
    "문의하기".to_string()
}
fn default_submitting_label() -> String {
    "전송 중...".to_string()
}
fn default_already_submitting() -> String {
    "이미 전송 중입니다.".to_string()
}
fn default_inquiry_number() -> String {
    "문의 번호".to_string()
}
fn default_title() -> String {
    "Contact".to_string()
}
fn default_back_to_top_threshold() -> u16 {
    10
}
fn default_resize_debounce_ms() -> u64 {
    100
}
fn default_log_dir() -> String {
    "~/.local/share/inquiry-desk/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_marks_is_public_as_bool() {
        let cfg = AppConfig::default();
        let is_public = cfg
            .form
            .fields
            .iter()
            .find(|f| f.name == "is_public")
            .unwrap();
        assert_eq!(is_public.coerce, Coercion::Bool);
        assert_eq!(is_public.kind, FieldKind::Toggle);
        let bools = cfg
            .form
            .fields
            .iter()
            .filter(|f| f.coerce == Coercion::Bool)
            .count();
        assert_eq!(bools, 1);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [endpoint]
            base_url = "https://example.com/"

            [ui]
            back_to_top_threshold = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.endpoint.inquiry_path, "/api/inquiry");
        assert_eq!(
            cfg.endpoint.url(&cfg.endpoint.inquiry_path),
            "https://example.com/api/inquiry"
        );
        assert_eq!(cfg.ui.back_to_top_threshold, 3);
        assert_eq!(cfg.ui.resize_debounce_ms, 100);
        assert_eq!(cfg.form.fields.len(), 7);
        assert!(!cfg.logging.journal);
    }

    #[test]
    fn test_custom_fields_parse() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[form.fields]]
            name = "topic"
            label = "Topic"
            kind = { type = "select", options = ["a", "b"] }
            required = true

            [[form.fields]]
            name = "subscribe"
            label = "Subscribe"
            kind = { type = "toggle" }
            coerce = "bool"
            default = "false"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.form.fields.len(), 2);
        assert_eq!(
            cfg.form.fields[0].kind,
            FieldKind::Select {
                options: vec!["a".into(), "b".into()]
            }
        );
        assert!(cfg.form.fields[0].required);
        assert_eq!(cfg.form.fields[1].coerce, Coercion::Bool);
        assert_eq!(cfg.form.fields[1].default, "false");
    }

    #[test]
    fn test_default_config_serializes() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.form.fields, cfg.form.fields);
        assert_eq!(back.messages.submit_success, cfg.messages.submit_success);
    }
}

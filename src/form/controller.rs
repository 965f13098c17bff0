//! Form submission controller.
//!
//! Drives one form through `Idle → Validating → Submitting → Settled → Idle`.
//! The submit control is disabled for the whole span between a passing
//! validation and settlement, and restored on every settlement branch.
//!
//! The flow is available as a single async [`FormController::submit`] or as the
//! split pair [`FormController::begin_submit`] / [`FormController::settle`] for
//! callers that must keep servicing other events while the request is in
//! flight.

use crate::config::{FieldConfig, MessagesConfig};
use crate::form::field::Field;
use crate::form::payload::FormPayload;
use crate::form::validator;
use crate::transport::{InquiryResponse, Transport, TransportError};
use crate::util::format::format_number;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form submit is already in progress")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Success,
    ServerRejected,
    TransportFailure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
    Settled(Settlement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Message shown to the user after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Submitting,
}

/// The submit button: resting label and enabled, or loading label and disabled.
#[derive(Debug, Clone)]
pub struct SubmitControl {
    state: ControlState,
    label: String,
    loading_label: String,
}

impl SubmitControl {
    pub fn new(label: &str, loading_label: &str) -> Self {
        Self {
            state: ControlState::Idle,
            label: label.to_string(),
            loading_label: loading_label.to_string(),
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == ControlState::Idle
    }

    pub fn label(&self) -> &str {
        match self.state {
            ControlState::Idle => &self.label,
            ControlState::Submitting => &self.loading_label,
        }
    }

    fn begin(&mut self) {
        self.state = ControlState::Submitting;
    }

    fn restore(&mut self) {
        self.state = ControlState::Idle;
    }
}

/// Result of the synchronous first half of a submit.
#[derive(Debug)]
pub enum SubmitStart {
    /// Validation failed; nothing was sent.
    Invalid(Notice),
    /// Validation passed and the control is now `Submitting`; send this payload.
    Started(FormPayload),
}

pub struct FormController {
    pub fields: Vec<Field>,
    control: SubmitControl,
    phase: Phase,
    last_settlement: Option<Settlement>,
    messages: MessagesConfig,
}

impl FormController {
    pub fn new(fields: &[FieldConfig], messages: MessagesConfig) -> Self {
        Self {
            fields: fields.iter().map(Field::from_config).collect(),
            control: SubmitControl::new(&messages.submit_label, &messages.submitting_label),
            phase: Phase::Idle,
            last_settlement: None,
            messages,
        }
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_settlement(&self) -> Option<Settlement> {
        self.last_settlement
    }

    pub fn is_submitting(&self) -> bool {
        self.control.state() == ControlState::Submitting
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Validate and, if that passes, move the control to `Submitting` and
    /// build the payload. Refuses while a submission is already in flight.
    ///
    /// A `Settled` phase counts as idle here; it only records how the last
    /// submission ended.
    pub fn begin_submit(&mut self) -> Result<SubmitStart, FormError> {
        if self.is_submitting() {
            warn!("submit ignored, another submission is in flight");
            return Err(FormError::AlreadySubmitting);
        }

        self.phase = Phase::Validating;
        if !validator::validate(&mut self.fields) {
            self.phase = Phase::Idle;
            return Ok(SubmitStart::Invalid(Notice::new(
                NoticeKind::Warning,
                &self.messages.required_missing,
            )));
        }

        self.control.begin();
        self.phase = Phase::Submitting;
        Ok(SubmitStart::Started(FormPayload::from_fields(&self.fields)))
    }

    /// Apply the outcome of the request and return the notice to show.
    ///
    /// Always restores the submit control, whatever the outcome.
    pub fn settle(&mut self, result: Result<InquiryResponse, TransportError>) -> Notice {
        if self.phase != Phase::Submitting {
            warn!(phase = ?self.phase, "settlement received outside of a submission");
        }

        let (settlement, notice) = match result {
            Ok(response @ InquiryResponse::Accepted(_)) => {
                for field in &mut self.fields {
                    field.reset();
                }
                let mut text = self.messages.submit_success.clone();
                if let Some(id) = response.inquiry_id() {
                    text.push_str(&format!(
                        " ({} #{})",
                        self.messages.inquiry_number,
                        format_number(id)
                    ));
                }
                info!(inquiry_id = ?response.inquiry_id(), "inquiry accepted");
                (Settlement::Success, Notice::new(NoticeKind::Success, text))
            }
            Ok(InquiryResponse::Rejected { status, error }) => {
                warn!(status, %error, "inquiry rejected by server");
                (
                    Settlement::ServerRejected,
                    Notice::new(
                        NoticeKind::Error,
                        format!("{}: {}", self.messages.submit_failure, error),
                    ),
                )
            }
            Err(e) => {
                error!(error = %e, "inquiry submission failed");
                (
                    Settlement::TransportFailure,
                    Notice::new(
                        NoticeKind::Error,
                        format!("{}.", self.messages.submit_failure),
                    ),
                )
            }
        };

        self.phase = Phase::Settled(settlement);
        self.last_settlement = Some(settlement);
        self.control.restore();
        notice
    }

    /// Full submit: validate, send through `transport`, settle.
    pub async fn submit(&mut self, transport: &dyn Transport) -> Result<Notice, FormError> {
        match self.begin_submit()? {
            SubmitStart::Invalid(notice) => Ok(notice),
            SubmitStart::Started(payload) => {
                let result = transport.submit_inquiry(&payload).await;
                Ok(self.settle(result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::transport::mock::{MockTransport, Scripted};
    use serde_json::json;

    fn controller() -> FormController {
        let cfg = AppConfig::default();
        FormController::new(&cfg.form.fields, cfg.messages)
    }

    fn fill_required(form: &mut FormController) {
        form.field_mut("name").unwrap().set_value("Kim");
        form.field_mut("email").unwrap().set_value("kim@example.com");
        form.field_mut("message").unwrap().set_value("hello");
    }

    fn values(form: &FormController) -> Vec<String> {
        form.fields.iter().map(|f| f.value().to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_required_field_sends_nothing() {
        let mut form = controller();
        form.field_mut("email").unwrap().set_value("kim@example.com");
        form.field_mut("message").unwrap().set_value("   ");
        let transport = MockTransport::new(Scripted::Accept(json!({})));

        let notice = form.submit(&transport).await.unwrap();

        assert_eq!(transport.calls(), 0);
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.text, "필수 항목을 모두 입력해주세요.");
        let invalid: Vec<_> = form
            .fields
            .iter()
            .filter(|f| f.invalid)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(invalid, vec!["name", "message"]);
        assert!(form.control().is_enabled());
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.last_settlement(), None);
    }

    #[tokio::test]
    async fn test_success_posts_every_field_and_resets() {
        let mut form = controller();
        fill_required(&mut form);
        let transport = MockTransport::new(Scripted::Accept(json!({"inquiry_id": 1234})));

        let notice = form.submit(&transport).await.unwrap();

        assert_eq!(transport.calls(), 1);
        let body = transport.last_body().unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Kim",
                "email": "kim@example.com",
                "phone": "",
                "company": "",
                "service_interest": "",
                "message": "hello",
                "is_public": true,
            })
        );
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(
            notice.text,
            "문의가 성공적으로 전송되었습니다. (문의 번호 #1,234)"
        );
        assert_eq!(form.field_mut("name").unwrap().value(), "");
        assert_eq!(form.field_mut("is_public").unwrap().value(), "true");
        assert!(form.control().is_enabled());
        assert_eq!(form.last_settlement(), Some(Settlement::Success));
    }

    #[tokio::test]
    async fn test_is_public_false_unless_exactly_true() {
        let mut form = controller();
        fill_required(&mut form);
        form.field_mut("is_public").unwrap().set_value("TRUE");
        let transport = MockTransport::new(Scripted::Accept(json!({})));

        form.submit(&transport).await.unwrap();

        assert_eq!(transport.last_body().unwrap()["is_public"], json!(false));
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_error_and_keeps_values() {
        let mut form = controller();
        fill_required(&mut form);
        let before = values(&form);
        let transport = MockTransport::new(Scripted::Reject(400, "duplicate"));

        let notice = form.submit(&transport).await.unwrap();

        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("duplicate"));
        assert_eq!(values(&form), before);
        assert!(form.control().is_enabled());
        assert_eq!(form.control().label(), "문의하기");
        assert_eq!(form.last_settlement(), Some(Settlement::ServerRejected));
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic() {
        let mut form = controller();
        fill_required(&mut form);
        let before = values(&form);
        let transport = MockTransport::new(Scripted::Fail);

        let notice = form.submit(&transport).await.unwrap();

        assert_eq!(notice.text, "문의 전송 중 오류가 발생했습니다.");
        assert!(!notice.text.contains("aborted"));
        assert_eq!(values(&form), before);
        assert!(form.control().is_enabled());
        assert_eq!(form.last_settlement(), Some(Settlement::TransportFailure));
    }

    #[test]
    fn test_control_is_loading_between_validation_and_settlement() {
        let mut form = controller();
        fill_required(&mut form);

        let start = form.begin_submit().unwrap();
        assert!(matches!(start, SubmitStart::Started(_)));
        assert_eq!(form.phase(), Phase::Submitting);
        assert!(!form.control().is_enabled());
        assert_eq!(form.control().label(), "전송 중...");

        form.settle(Err(TransportError::Aborted));
        assert!(form.control().is_enabled());
        assert_eq!(form.control().label(), "문의하기");
        assert_eq!(form.phase(), Phase::Settled(Settlement::TransportFailure));
    }

    #[test]
    fn test_settled_phase_holds_until_next_submit() {
        let mut form = controller();
        fill_required(&mut form);
        form.begin_submit().unwrap();
        form.settle(Ok(InquiryResponse::Rejected {
            status: 409,
            error: "duplicate".into(),
        }));
        assert_eq!(form.phase(), Phase::Settled(Settlement::ServerRejected));

        // Fields were kept, so the retry goes straight back to Submitting
        assert!(matches!(form.begin_submit(), Ok(SubmitStart::Started(_))));
        assert_eq!(form.phase(), Phase::Submitting);

        form.settle(Ok(InquiryResponse::Accepted(json!({}))));
        assert_eq!(form.phase(), Phase::Settled(Settlement::Success));

        // Fields were reset, so validation fails and the phase drops to Idle
        assert!(matches!(form.begin_submit(), Ok(SubmitStart::Invalid(_))));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let mut form = controller();
        fill_required(&mut form);

        assert!(matches!(form.begin_submit(), Ok(SubmitStart::Started(_))));
        assert_eq!(form.begin_submit().unwrap_err(), FormError::AlreadySubmitting);
        assert!(!form.control().is_enabled());

        form.settle(Ok(InquiryResponse::Accepted(json!({}))));
        fill_required(&mut form);
        assert!(matches!(form.begin_submit(), Ok(SubmitStart::Started(_))));
    }
}

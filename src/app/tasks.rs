//! Background request tasks. Each reports back to the main loop through the
//! event channel.

use crate::app::event::AppEvent;
use crate::form::payload::FormPayload;
use crate::transport::{InquiryResponse, Transport, TransportError};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Delivers exactly one `SubmissionSettled` event: the real result via
/// [`SettleGuard::settle`], or `TransportError::Aborted` if dropped first
/// (task panic or runtime shutdown).
struct SettleGuard {
    event_tx: Option<mpsc::UnboundedSender<AppEvent>>,
}

impl SettleGuard {
    fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx: Some(event_tx),
        }
    }

    fn settle(mut self, result: Result<InquiryResponse, TransportError>) {
        if let Some(tx) = self.event_tx.take() {
            let _ = tx.send(AppEvent::SubmissionSettled(result));
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.event_tx.take() {
            let _ = tx.send(AppEvent::SubmissionSettled(Err(TransportError::Aborted)));
        }
    }
}

/// Send one inquiry on a background task.
pub fn spawn_submission(
    transport: Arc<dyn Transport>,
    payload: FormPayload,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let guard = SettleGuard::new(event_tx);
        let result = transport.submit_inquiry(&payload).await;
        guard.settle(result);
    });
}

/// Probe `/health` and fetch the company info once.
pub fn spawn_startup_probes(
    transport: Arc<dyn Transport>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let health = transport.health().await;
        if event_tx.send(AppEvent::HealthChecked(health)).is_err() {
            return;
        }
        let info = transport.company_info().await;
        let _ = event_tx.send(AppEvent::CompanyInfoLoaded(info));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::{MockTransport, Scripted};
    use serde_json::json;

    #[tokio::test]
    async fn test_submission_reports_result() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let transport = Arc::new(MockTransport::new(Scripted::Reject(400, "name is required")));
        spawn_submission(transport.clone(), FormPayload::default(), tx);

        match rx.recv().await {
            Some(AppEvent::SubmissionSettled(Ok(InquiryResponse::Rejected { error, .. }))) => {
                assert_eq!(error, "name is required");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(transport.calls(), 1);
        // Exactly one settlement
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_guard_settles_when_task_panics() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let _guard = SettleGuard::new(tx);
            panic!("request task blew up");
        });
        assert!(handle.await.is_err());

        assert!(matches!(
            rx.recv().await,
            Some(AppEvent::SubmissionSettled(Err(TransportError::Aborted)))
        ));
    }

    #[tokio::test]
    async fn test_startup_probes_report_both() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let transport = Arc::new(MockTransport::new(Scripted::Accept(json!({}))));
        spawn_startup_probes(transport, tx);

        assert!(matches!(rx.recv().await, Some(AppEvent::HealthChecked(Ok(_)))));
        assert!(matches!(
            rx.recv().await,
            Some(AppEvent::CompanyInfoLoaded(Ok(_)))
        ));
    }
}

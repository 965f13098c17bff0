use crate::transport::{CompanyInfo, HealthStatus, InquiryResponse, TransportError};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The in-flight inquiry request settled
    SubmissionSettled(Result<InquiryResponse, TransportError>),

    /// Startup probes of the website API
    HealthChecked(Result<HealthStatus, TransportError>),
    CompanyInfoLoaded(Result<CompanyInfo, TransportError>),

    /// Debounced redraw after a burst of resizes
    Redraw,

    /// Tick for UI refresh
    Tick,
}

//! Network side of the inquiry form.
//!
//! [`Transport`] is the seam between the form controller and the website API.
//! [`http::HttpTransport`] is the real implementation; tests plug in a
//! recording mock.

pub mod http;

use crate::form::payload::FormPayload;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The exchange could not be completed, as opposed to a server rejection.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("could not encode payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("request task ended before settling")]
    Aborted,
}

/// Outcome of a completed inquiry exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum InquiryResponse {
    Accepted(serde_json::Value),
    Rejected { status: u16, error: String },
}

impl InquiryResponse {
    /// Classify a decoded response. A rejection without an `error` string
    /// falls back to the status reason phrase.
    pub fn from_parts(status: StatusCode, body: serde_json::Value) -> Self {
        if status.is_success() {
            return InquiryResponse::Accepted(body);
        }
        let error = body
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        InquiryResponse::Rejected {
            status: status.as_u16(),
            error,
        }
    }

    /// Server-assigned id of an accepted inquiry, when the body carries one.
    pub fn inquiry_id(&self) -> Option<i64> {
        match self {
            InquiryResponse::Accepted(body) => body.get("inquiry_id").and_then(|v| v.as_i64()),
            InquiryResponse::Rejected { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Company details published by the website.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub company_name: Option<String>,
    pub english_name: Option<String>,
    pub ceo: Option<String>,
    pub established: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub business_hours: Option<String>,
}

impl CompanyInfo {
    /// Label/value pairs for the fields that are present.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Company", &self.company_name),
            ("English", &self.english_name),
            ("CEO", &self.ceo),
            ("Since", &self.established),
            ("Address", &self.address),
            ("Phone", &self.phone),
            ("Fax", &self.fax),
            ("Email", &self.email),
            ("Hours", &self.business_hours),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one inquiry. No retry.
    async fn submit_inquiry(&self, payload: &FormPayload)
        -> Result<InquiryResponse, TransportError>;

    async fn health(&self) -> Result<HealthStatus, TransportError>;

    async fn company_info(&self) -> Result<CompanyInfo, TransportError>;
}

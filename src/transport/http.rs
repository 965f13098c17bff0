use crate::config::EndpointConfig;
use crate::form::payload::FormPayload;
use crate::transport::{CompanyInfo, HealthStatus, InquiryResponse, Transport, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// reqwest-backed [`Transport`]. Uses the platform default timeouts.
pub struct HttpTransport {
    client: Client,
    inquiry_url: String,
    health_url: String,
    company_info_url: String,
}

impl HttpTransport {
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("inquiry-desk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            inquiry_url: endpoint.url(&endpoint.inquiry_path),
            health_url: endpoint.url(&endpoint.health_path),
            company_info_url: endpoint.url(&endpoint.company_info_path),
        })
    }

    pub fn inquiry_url(&self) -> &str {
        &self.inquiry_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit_inquiry(
        &self,
        payload: &FormPayload,
    ) -> Result<InquiryResponse, TransportError> {
        debug!(url = %self.inquiry_url, fields = payload.len(), "posting inquiry");

        let response = self.client.post(&self.inquiry_url).json(payload).send().await?;
        let status = response.status();
        // Decoded by hand so a non-JSON body is told apart from a network error
        let bytes = response.bytes().await?;
        let json: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(TransportError::Decode)?;
        debug!(%status, "inquiry response received");
        Ok(InquiryResponse::from_parts(status, json))
    }

    async fn health(&self) -> Result<HealthStatus, TransportError> {
        let health = self
            .client
            .get(&self.health_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(health)
    }

    async fn company_info(&self) -> Result<CompanyInfo, TransportError> {
        let info = self
            .client
            .get(&self.company_info_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(info)
    }
}

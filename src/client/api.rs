use async_trait::async_trait;

use crate::client::error::ClientError;
use crate::features::reports::dtos::{CreateReportDto, CreateReportResponseDto, ReportResponseDto};
use crate::shared::types::MessageResponse;

/// The two report operations the client performs against the server
#[async_trait]
pub trait ReportApi: Send + Sync {
    async fn list_reports(&self) -> Result<Vec<ReportResponseDto>, ClientError>;

    async fn create_report(
        &self,
        dto: &CreateReportDto,
    ) -> Result<CreateReportResponseDto, ClientError>;
}

/// [`ReportApi`] over HTTP/JSON
pub struct HttpReportApi {
    client: reqwest::Client,
    api_url: String,
}

impl HttpReportApi {
    pub fn new(api_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Reporta/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Connectivity(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Turn a non-success response into [`ClientError::Rejected`], preferring
    /// the server's `{message}` body over the bare status
    async fn rejection(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = match response.json::<MessageResponse>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };

        ClientError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl ReportApi for HttpReportApi {
    async fn list_reports(&self) -> Result<Vec<ReportResponseDto>, ClientError> {
        let response = self.client.get(&self.api_url).send().await.map_err(|e| {
            tracing::debug!("GET {} failed: {:?}", self.api_url, e);
            ClientError::Connectivity(e.to_string())
        })?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn create_report(
        &self,
        dto: &CreateReportDto,
    ) -> Result<CreateReportResponseDto, ClientError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(dto)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("POST {} failed: {:?}", self.api_url, e);
                ClientError::Connectivity(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

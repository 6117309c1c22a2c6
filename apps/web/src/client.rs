//! Content API client: the only place the page controller talks HTTP.
use content::{ContactAck, ContactSubmission, ErrorBody, HealthStatus, Profile, Project};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http(_))
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /health. Any failure is logged and reported as `None`.
    pub async fn check_health(&self) -> Option<HealthStatus> {
        let request = self.client.get(self.url("/health"));
        match send_json::<HealthStatus>(request, "Health check failed").await {
            Ok(health) => Some(health),
            Err(e) => {
                warn!("Health check error: {e}");
                None
            }
        }
    }

    /// GET /api/about
    pub async fn get_about(&self) -> Result<Profile, ClientError> {
        let request = self.client.get(self.url("/api/about"));
        send_json(request, "Failed to fetch about data").await
    }

    /// GET /api/projects
    pub async fn get_projects(&self) -> Result<Vec<Project>, ClientError> {
        let request = self.client.get(self.url("/api/projects"));
        send_json(request, "Failed to fetch projects").await
    }

    /// POST /api/contact
    pub async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactAck, ClientError> {
        let request = self.client.post(self.url("/api/contact")).json(submission);
        send_json(request, "Failed to submit contact form").await
    }
}

/// Sends a request and decodes a JSON body. Non-2xx responses carry the
/// server's `error` text when it sent one, `fallback` otherwise.
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    fallback: &str,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| fallback.to_string());
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    debug!("API responded {status} with {} bytes", bytes.len());
    Ok(serde_json::from_slice(&bytes)?)
}

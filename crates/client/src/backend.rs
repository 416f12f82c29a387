//! The network seam: verification and translation calls.

use std::time::Duration;

use async_trait::async_trait;
use factcheck_core::api::{
    CheckRequest, CheckResponse, ErrorResponse, TranslateRequest, TranslateResponse,
};
use factcheck_core::model::{Language, VerificationResult};

/// Failure of a `/check` call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// Offline, DNS, timeout, or an unreadable response body.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// `error` field of the response body, if any.
        message: Option<String>,
    },
}

/// Failure of a `/translate` call. Always recovered by showing canonical text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// Transport failure or timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// Success status but no `translated` field.
    #[error("response has no translation")]
    Missing,
}

/// Verification and translation backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Submits a claim for verification.
    async fn check(&self, req: &CheckRequest) -> Result<VerificationResult, CheckError>;

    /// Translates `text` into `target`.
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError>;
}

/// [`Backend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` is the service root, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn check(&self, req: &CheckRequest) -> Result<VerificationResult, CheckError> {
        let resp = self
            .client
            .post(self.url("check"))
            .json(req)
            .send()
            .await
            .map_err(|e| CheckError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // A failure body that is not JSON still counts as a server error.
            let message = resp
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .filter(|m| !m.trim().is_empty());
            tracing::warn!(status = %status, message = ?message, "check rejected by backend");
            return Err(CheckError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp
            .json::<CheckResponse>()
            .await
            .map_err(|e| CheckError::Network(e.to_string()))?;
        Ok(body.into())
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError> {
        let resp = self
            .client
            .post(self.url("translate"))
            .json(&TranslateRequest {
                text: text.to_string(),
                target: target.code().to_string(),
            })
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(TranslateError::Status(resp.status().as_u16()));
        }

        let body = resp
            .json::<TranslateResponse>()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;
        body.translated
            .filter(|t| !t.trim().is_empty())
            .ok_or(TranslateError::Missing)
    }
}

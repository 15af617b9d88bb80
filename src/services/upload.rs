use crate::models::CandidateFile;
use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use std::time::Instant;
use thiserror::Error;

/// Errors from the exchange with the processing endpoint.
///
/// Both variants are recoverable: the controller surfaces them as a single
/// error notification and returns the session to idle.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Endpoint answered outside the 2xx range. The numeric code is part of
    /// the user-visible message.
    #[error("server returned status {0}")]
    Status(u16),

    /// Transport-level failure (connection refused, DNS, aborted body, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// The network exchange seam.
///
/// The controller only ever sees this trait, which keeps it headless-testable:
/// integration tests substitute a mock and assert on call counts, the binary
/// injects [`HttpUploadClient`].
#[async_trait]
pub trait UploadTransport: Send + Sync {
    /// Submit the candidate and return the entire response body as an opaque
    /// downloadable payload.
    async fn upload(&self, file: &CandidateFile) -> Result<Bytes>;
}

/// `reqwest`-backed transport: one multipart `POST` per submission with a
/// single part named `file` carrying the candidate's bytes and original name.
pub struct HttpUploadClient {
    client: Client,
    endpoint: Url,
}

impl HttpUploadClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Use a pre-configured client (proxies, timeouts) instead of the default.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UploadTransport for HttpUploadClient {
    async fn upload(&self, file: &CandidateFile) -> Result<Bytes> {
        let part = Part::bytes(file.content.to_vec()).file_name(file.name.clone());
        let form = Form::new().part("file", part);

        tracing::debug!(endpoint = %self.endpoint, name = %file.name, "Posting upload");
        let start = Instant::now();

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Endpoint rejected upload");
            return Err(UploadError::Status(status.as_u16()).into());
        }

        let body = response.bytes().await.map_err(UploadError::Network)?;

        tracing::info!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upload exchange completed"
        );

        Ok(body)
    }
}

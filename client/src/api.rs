use async_trait::async_trait;
use shared::models::{ChatReply, ChatRequest};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/chat";

/// Ways a remote reply can fail. All of them end in the local fallback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcquireError {
    #[error("Remote unavailable: {0}")]
    RemoteUnavailable(String),
    #[error("Remote rejected the request: {0}")]
    RemoteRejected(String),
    #[error("Remote timed out after {}ms", .0.as_millis())]
    RemoteTimedOut(Duration),
}

/// One outbound chat request, answered with the reply text
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<String, AcquireError>;
}

/// `POST`s the request as JSON to the chat endpoint
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String, AcquireError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AcquireError::RemoteUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquireError::RemoteRejected(format!("status {}", status)));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| AcquireError::RemoteRejected(format!("invalid payload: {}", e)))?;

        if reply.text.trim().is_empty() {
            return Err(AcquireError::RemoteRejected("empty reply text".to_string()));
        }
        Ok(reply.text)
    }
}

//! Remote-first reply acquisition.
//!
//! A single remote attempt is raced against a timer. Whatever goes wrong,
//! the caller still gets a reply from local banter, and the attached
//! [`FallbackNotifier`] hears about it.

use crate::api::{AcquireError, ChatTransport, DEFAULT_ENDPOINT, HttpTransport};
use crate::banter::{BanterSource, LocalBanterGenerator};
use crate::notify::{FallbackNotice, FallbackNotifier};
use shared::models::{ChatRequest, Personality};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(7000);

#[derive(Clone, Debug, PartialEq)]
pub struct AcquirerConfig {
    /// Full URL of the chat endpoint
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AcquirerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

#[derive(Clone)]
pub struct ResponseAcquirer {
    transport: Arc<dyn ChatTransport>,
    banter: Arc<dyn BanterSource>,
    notifier: Option<Arc<dyn FallbackNotifier>>,
    timeout: Duration,
}

impl ResponseAcquirer {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            banter: Arc::new(LocalBanterGenerator::default()),
            notifier: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(config: &AcquirerConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(config.endpoint.clone()));
        Self {
            timeout: config.timeout,
            ..Self::new(transport)
        }
    }

    pub fn with_banter(mut self, banter: Arc<dyn BanterSource>) -> Self {
        self.banter = banter;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn FallbackNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Reply text for `message`; never fails.
    pub async fn acquire_response(&self, personality: Personality, message: &str) -> String {
        self.acquire_reply(personality, message).await.text
    }

    /// Like [`acquire_response`](Self::acquire_response), also telling where
    /// the text came from.
    pub async fn acquire_reply(&self, personality: Personality, message: &str) -> Reply {
        match self.attempt_remote(personality, message).await {
            Ok(text) => Reply {
                text,
                source: ReplySource::Remote,
            },
            Err(reason) => self.fall_back(personality, message, reason),
        }
    }

    async fn attempt_remote(
        &self,
        personality: Personality,
        message: &str,
    ) -> Result<String, AcquireError> {
        let request = ChatRequest::new(personality, message);
        let remote = self.transport.send(&request);
        // The transport future is dropped when the timer wins.
        match tokio::time::timeout(self.timeout, remote).await {
            Ok(result) => result,
            Err(_) => Err(AcquireError::RemoteTimedOut(self.timeout)),
        }
    }

    fn fall_back(&self, personality: Personality, message: &str, reason: AcquireError) -> Reply {
        tracing::warn!(
            "Remote {} reply failed, falling back to local replies: {}",
            personality,
            reason
        );
        let text = self.banter.generate(personality, message);
        if let Some(notifier) = &self.notifier {
            notifier.notify(FallbackNotice {
                personality,
                reason,
            });
        }
        Reply {
            text,
            source: ReplySource::Fallback,
        }
    }
}

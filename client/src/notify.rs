use crate::api::AcquireError;
use shared::models::Personality;
use std::fmt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Raised whenever a reply came from local banter instead of the remote model
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackNotice {
    pub personality: Personality,
    pub reason: AcquireError,
}

impl fmt::Display for FallbackNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Falling back to local replies ({})", self.reason)
    }
}

/// Receives fallback notices. Implementations must return without waiting.
pub trait FallbackNotifier: Send + Sync {
    fn notify(&self, notice: FallbackNotice);
}

impl<F> FallbackNotifier for F
where
    F: Fn(FallbackNotice) + Send + Sync,
{
    fn notify(&self, notice: FallbackNotice) {
        self(notice)
    }
}

/// Forwards notices over an unbounded channel
#[derive(Clone, Debug)]
pub struct ChannelNotifier(UnboundedSender<FallbackNotice>);

impl ChannelNotifier {
    pub fn channel() -> (Self, UnboundedReceiver<FallbackNotice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self(tx), rx)
    }
}

impl FallbackNotifier for ChannelNotifier {
    fn notify(&self, notice: FallbackNotice) {
        if self.0.send(notice).is_err() {
            tracing::debug!("Fallback notice dropped, nobody is listening");
        }
    }
}

//! UI-side core of the banter chat.
//!
//! [`ResponseAcquirer`] asks the remote endpoint for a reply and degrades to
//! [`LocalBanterGenerator`] when that fails, so callers always get a string.

pub mod acquirer;
pub mod api;
pub mod banter;
pub mod export;
pub mod notify;
pub mod session;
pub mod store;

pub use acquirer::{AcquirerConfig, DEFAULT_TIMEOUT, Reply, ReplySource, ResponseAcquirer};
pub use api::{AcquireError, ChatTransport, DEFAULT_ENDPOINT, HttpTransport};
pub use banter::{
    BanterSource, FixedIndex, IndexSource, LocalBanterGenerator, SeededRandom, ThreadRandom,
};
pub use export::{ExportError, export_txt, transcript_text};
pub use notify::{ChannelNotifier, FallbackNotice, FallbackNotifier};
pub use session::{SessionError, SessionStore};
pub use store::{Action, ChatState};

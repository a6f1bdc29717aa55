pub mod chat;
pub mod message;
pub mod personality;
pub mod settings;

pub use chat::*;
pub use message::*;
pub use personality::*;
pub use settings::*;

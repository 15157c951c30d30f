//! Client side of the chat relay.
mod client;
mod session;
mod transcript;

pub use client::{HttpRelayClient, RelayClient};
pub use session::{ChatWidget, DEFAULT_SUPPORT_PHONE, QuickReply, apology, greeting};
pub use transcript::{Message, Sender, Transcript};

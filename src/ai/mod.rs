pub mod prompt;
pub mod relay;

pub use relay::{CANNED_REDIRECT, Relay};

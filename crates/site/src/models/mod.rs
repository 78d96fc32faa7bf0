//! Domain models for the site.

pub mod account;
pub mod chat;

pub use account::{Account, CurrentAccount, session_keys};
pub use chat::ChatMessage;

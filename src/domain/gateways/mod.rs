//! Gateway traits for the collaborators the workflow talks to.
//!
//! Implementations live in `crate::infrastructure`; mock implementations are
//! generated via `mockall` for unit tests.

pub mod clipboard;
pub mod shortener_client;

pub use clipboard::Clipboard;
pub use shortener_client::ShortenerClient;

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use shortener_client::MockShortenerClient;

//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Shortening service client over HTTP/JSON
//! - [`clipboard`] - System clipboard and its no-op fallback

pub mod clipboard;
pub mod http;

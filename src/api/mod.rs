//! Wire contract of the remote shortening service.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads of `POST /shorten`

pub mod dto;

//! Data Transfer Objects for the shortening service API.
//!
//! The request body is the domain entity
//! [`crate::domain::entities::ShortenRequest`]; this module holds the
//! response shapes.

pub mod shorten;

pub use shorten::{ErrorResponse, ShortenResponse};

//! Domain layer: input rules, entities and collaborator contracts.
//!
//! Nothing here performs I/O.
//!
//! # Architecture
//!
//! - [`validation`] - Pure checks on the raw form inputs
//! - [`redirect_error`] - Error signals carried by the page URL
//! - [`entities`] - Request and short URL values
//! - [`gateways`] - Traits for the shortening service and the clipboard
//!
//! The workflow that ties these together lives in
//! [`crate::application::services`].

pub mod entities;
pub mod gateways;
pub mod redirect_error;
pub mod validation;

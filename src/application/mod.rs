//! Application layer services implementing the submission workflow.
//!
//! This layer orchestrates domain operations: it runs the validation rules,
//! calls the shortening service through its gateway trait and keeps the
//! display state the terminal surface renders.
//!
//! # Available Services
//!
//! - [`services::submission_service::SubmissionService`] - Submit, redirect error and copy flows
//! - [`services::display::DisplayState`] - Error slot, short URL slot, loading flag and notices

pub mod services;

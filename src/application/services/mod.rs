//! Workflow services for the application layer.

pub mod display;
pub mod submission_service;

pub use display::{DisplayState, Notice, NoticeLevel};
pub use submission_service::{
    Submission, SubmissionService, SubmissionState, WorkflowSettings,
};

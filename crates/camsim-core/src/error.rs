//! Error types for the resolution engine core
//!
//! Only the complete absence of required context is an error here; bad
//! per-operation data is handled through the warning report instead.

use thiserror::Error;

/// Core engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The project has never been saved, so there is no machine-code
    /// output path to resolve against
    #[error("Project has no machine-code output path; save the project first")]
    ProjectNotSaved,
}

/// Result type using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

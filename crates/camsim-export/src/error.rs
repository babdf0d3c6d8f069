//! Error types for document serialization.

use thiserror::Error;

/// Errors that can occur while rendering the simulator document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The XML writer failed.
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The rendered document is not valid UTF-8.
    #[error("Rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

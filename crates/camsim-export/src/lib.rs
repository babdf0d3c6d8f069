//! # camsim Export
//!
//! Assembles the resolved tool table and stock envelope into one
//! simulator project document, and renders it as XML.

pub mod document;
pub mod error;
pub mod xml;

pub use document::SimDocument;
pub use error::{ExportError, ExportResult};

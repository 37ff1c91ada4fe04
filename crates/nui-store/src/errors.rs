//! Error handling for nui-store
//!
//! Wraps nui-core ExError with store-specific helpers

use nui_core::errors::{ExError, ExErrorKind, NuiError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a file operation
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a document persistence error
pub fn document_io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::from(NuiError::DocumentIo {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
    .with_op(operation.to_string())
}

/// Create a keyword table parse error
pub fn keyword_table_parse(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("keyword_table_parse")
        .with_message(reason.to_string())
}

/// Create a keyword table validation error
pub fn keyword_table_invalid(err: NuiError) -> ExError {
    ExError::from(err).with_op("keyword_table_validate")
}

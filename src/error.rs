//! Error types for dstv-peddimat

use crate::types::Surface;
use std::io;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The partmark line does not match the expected identifier
    #[error("Partmark mismatch: expected {expected:?}, found {found:?}")]
    PartmarkMismatch { expected: String, found: String },

    /// The quantity line is not a positive integer
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// A header line is missing from the document
    #[error("Missing header field '{field}' at line {line}")]
    MissingField { field: &'static str, line: usize },

    /// A header line could not be interpreted
    #[error("Invalid header field '{field}' at line {line}: {value:?}")]
    InvalidField {
        field: &'static str,
        line: usize,
        value: String,
    },

    /// A hole definition line could not be decoded
    #[error("Malformed hole at line {line}: {reason}")]
    MalformedHole { line: usize, reason: String },

    /// Profile type cannot be encoded
    #[error("Unsupported profile type: {0:?}")]
    UnsupportedProfileType(String),

    /// Too many distinct hole sizes on a single surface
    #[error(
        "Unsupported tool capacity: {distinct} distinct sizes on {surface} surface (max {max})"
    )]
    UnsupportedCapacity {
        surface: Surface,
        distinct: usize,
        max: usize,
    },

    /// A hole size has no slot in the tool registry
    #[error("No tool registered for size {size:?} on {surface} surface")]
    UnknownTool { surface: Surface, size: String },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl ConvertError {
    /// Whether this error means the source text is not a well-formed NC1 record
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ConvertError::PartmarkMismatch { .. }
                | ConvertError::InvalidQuantity(_)
                | ConvertError::MissingField { .. }
                | ConvertError::InvalidField { .. }
                | ConvertError::MalformedHole { .. }
        )
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

impl From<String> for ConvertError {
    fn from(s: String) -> Self {
        ConvertError::Custom(s)
    }
}

impl From<&str> for ConvertError {
    fn from(s: &str) -> Self {
        ConvertError::Custom(s.to_string())
    }
}

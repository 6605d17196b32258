//! Error types for dxf-records

use std::io;
use thiserror::Error;

/// Broad classification of a [`DxfError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The record stream does not match the expected grammar
    Format,
    /// The underlying stream or file failed
    Resource,
    /// The stream ended while more chunks were required
    EndOfStream,
}

/// Main error type for dxf-records operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A code line could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value could not be converted to the requested type
    #[error("Invalid value for code {code}: '{value}' is not a valid {expected}")]
    InvalidValue {
        code: i32,
        value: String,
        expected: &'static str,
    },

    /// The stream ended in the middle of a record
    #[error("Unexpected end of stream: {0}")]
    UnexpectedEof(String),

    /// A fixed field marker was not where the schema requires it
    #[error("{expected} expected")]
    MissingMarker { expected: i32, found: Option<i32> },

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Hatch pattern name not present in the source stream
    #[error("Hatch pattern not found: {0}")]
    PatternNotFound(String),

    /// Invalid table entry name
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Named table entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl DxfError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DxfError::Io(_) => ErrorKind::Resource,
            DxfError::UnexpectedEof(_) => ErrorKind::EndOfStream,
            _ => ErrorKind::Format,
        }
    }

    /// Check whether this error describes malformed input
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}

/// Result type alias for dxf-records operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_marker_display() {
        let err = DxfError::MissingMarker {
            expected: 49,
            found: Some(8),
        };
        assert_eq!(err.to_string(), "49 expected");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = DxfError::InvalidValue {
            code: 62,
            value: "red".to_string(),
            expected: "i16",
        };
        assert!(err.to_string().contains("'red'"));
        assert!(err.to_string().contains("62"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
        assert_eq!(dxf_err.kind(), ErrorKind::Resource);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            DxfError::UnexpectedEof("value of code 8".into()).kind(),
            ErrorKind::EndOfStream
        );
        assert!(DxfError::InvalidFormat("bad".into()).is_format_error());
        assert!(DxfError::Parse("x".into()).is_format_error());
    }
}

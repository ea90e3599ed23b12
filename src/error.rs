//! Custom error types for the address book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for address book operations
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Interactive input errors (closed stdin, exhausted retries)
    #[error("Input error: {0}")]
    Input(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AddressBookError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AddressBookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AddressBookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for address book operations
pub type AddressBookResult<T> = Result<T, AddressBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = AddressBookError::contact_not_found("John_Doe");
        assert_eq!(err.to_string(), "Contact not found: John_Doe");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let book_err: AddressBookError = io_err.into();
        assert!(matches!(book_err, AddressBookError::Io(_)));
    }
}

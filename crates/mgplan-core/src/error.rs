//! Unified error types for the mgplan ecosystem
//!
//! This module provides a common error type [`MgError`] that can represent
//! errors from any part of the system. Domain-specific error types (such as
//! the siting errors in `mgplan-algo`) convert to `MgError` for uniform
//! handling at API boundaries.

use thiserror::Error;

/// Unified error type for all mgplan operations.
#[derive(Error, Debug)]
pub enum MgError {
    /// I/O errors (file access, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data validation errors (missing columns, empty tables, bad parameters)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Solver/algorithm errors
    #[error("Solver error: {0}")]
    Solver(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using MgError.
pub type MgResult<T> = Result<T, MgError>;

impl From<anyhow::Error> for MgError {
    fn from(err: anyhow::Error) -> Self {
        MgError::Other(err.to_string())
    }
}

impl From<String> for MgError {
    fn from(s: String) -> Self {
        MgError::Other(s)
    }
}

impl From<&str> for MgError {
    fn from(s: &str) -> Self {
        MgError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MgError::Solver("no feasible assignment".into());
        assert!(err.to_string().contains("Solver error"));
        assert!(err.to_string().contains("no feasible assignment"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let mg_err: MgError = io_err.into();
        assert!(matches!(mg_err, MgError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> MgResult<()> {
            Err(MgError::Validation("test".into()))
        }

        fn outer() -> MgResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Error types for Barko
//!
//! Absent capability signals are not errors: they contribute zero to the
//! score and never surface here. Errors are reserved for storage, config,
//! and probe runtime failures.

use thiserror::Error;

/// Main error type for Barko operations
#[derive(Error, Debug)]
pub enum BarkoError {
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Frame probe errors
    #[error("Probe error: {0}")]
    Probe(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Barko operations
pub type Result<T> = std::result::Result<T, BarkoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = BarkoError::Storage("write failed".to_string());
        assert!(err.to_string().contains("Storage error"));
        assert!(err.to_string().contains("write failed"));
    }

    #[test]
    fn test_config_error_display() {
        let err = BarkoError::Config("bad settings".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_probe_error_display() {
        let err = BarkoError::Probe("sampler died".to_string());
        assert!(err.to_string().contains("Probe error"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = BarkoError::InvalidInput("not a theme".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BarkoError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_result_alias() {
        fn ok() -> Result<u32> {
            Ok(7)
        }
        assert_eq!(ok().unwrap(), 7);
    }
}

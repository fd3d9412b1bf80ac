//! Configuration system error types.
//!
//! Domain-specific errors for loading, parsing, and validating the bot
//! configuration document. A malformed document is fatal for the run: the
//! consumer must not attempt any remote action (commit, PR, merge) after a
//! load failure.

use thiserror::Error;

// Import ValidationError for the ValidationFailed variant
use crate::validation::ValidationError;

/// Configuration system errors.
///
/// These errors occur when loading, parsing, or validating the configuration
/// document. Validation happens eagerly at load time, so every structural
/// problem surfaces before any update processing begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to access configuration file: {path} - {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("Failed to parse configuration: {reason}")]
    ParseError { reason: String },

    #[error("Failed to serialize configuration: {reason}")]
    SerializeError { reason: String },

    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Configuration validation failed with {error_count} error(s)")]
    ValidationFailed {
        error_count: usize,
        errors: Vec<ValidationError>,
    },
}

impl ConfigurationError {
    /// Wrap a set of field-level validation errors into a load failure.
    pub fn validation_failed(errors: Vec<ValidationError>) -> Self {
        Self::ValidationFailed {
            error_count: errors.len(),
            errors,
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

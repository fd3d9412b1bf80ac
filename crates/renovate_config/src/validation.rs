//! Validation result types.
//!
//! Field-level errors and warnings collected while validating a configuration
//! document. Validation is a single pass that gathers every problem before
//! the load fails, so the author sees all offending fields at once instead of
//! fixing them one by one.
//!
//! # Examples
//!
//! ```rust
//! use renovate_config::{ValidationError, ValidationErrorType, ValidationResult};
//!
//! let mut result = ValidationResult::new();
//! assert!(result.is_valid());
//!
//! result.add_error(ValidationError {
//!     error_type: ValidationErrorType::InvalidValue,
//!     field_path: "platform".to_string(),
//!     message: "unsupported platform 'not-a-real-platform'".to_string(),
//!     suggestion: Some("use one of: github, gitlab, ...".to_string()),
//! });
//!
//! assert!(!result.is_valid());
//! ```

use std::fmt;

/// Result of validating a configuration document.
///
/// Contains all validation errors and warnings found during the pass.
/// Validation is considered successful only if no errors are present;
/// warnings are advisory and never block the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// List of validation errors (blocking issues).
    pub errors: Vec<ValidationError>,
    /// List of validation warnings (non-blocking advisories).
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a new empty validation result.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add a validation error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a validation warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Individual validation error with context.
///
/// Names the offending field via a dot-separated path (sequence entries use
/// index notation, e.g. `packageRules[0].matchUpdateTypes[1]`) so the author
/// can locate the problem without guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The category of validation error.
    pub error_type: ValidationErrorType,
    /// Dot-separated path to the field that failed validation.
    pub field_path: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    pub suggestion: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

/// Validation error categories.
///
/// Used to classify validation errors for appropriate handling and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorType {
    /// Configuration structure doesn't match the expected schema.
    SchemaViolation,
    /// A required field is missing.
    RequiredFieldMissing,
    /// A field value is invalid (outside its enumeration, out of range, malformed).
    InvalidValue,
}

impl fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaViolation => write!(f, "SchemaViolation"),
            Self::RequiredFieldMissing => write!(f, "RequiredFieldMissing"),
            Self::InvalidValue => write!(f, "InvalidValue"),
        }
    }
}

/// Non-blocking validation warning.
///
/// Warnings indicate likely author mistakes that don't prevent the run, such
/// as a package rule with neither match predicates nor action fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Dot-separated path to the field that triggered the warning.
    pub field_path: String,
    /// Human-readable warning message.
    pub message: String,
    /// Optional recommendation for addressing the warning.
    pub recommendation: Option<String>,
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;

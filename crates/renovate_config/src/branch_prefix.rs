//! Branch prefix validation.
//!
//! The branch prefix is prepended to every update branch the bot creates, so
//! it has to be a valid Git branch-name segment. A trailing `/` is allowed
//! and conventional (`renovate/`).

use serde::Serialize;
use std::fmt;

use crate::errors::{ConfigurationError, ConfigurationResult};

/// A validated branch-name prefix.
///
/// Branch prefixes must:
/// - Be non-empty
/// - Contain no whitespace or ASCII control characters
/// - Contain none of the Git-forbidden characters `~ ^ : ? * [ \`
/// - Not contain `..` or `@{`
/// - Not start with `/`
///
/// # Examples
///
/// ```rust
/// use renovate_config::BranchPrefix;
///
/// let prefix = BranchPrefix::try_new("renovate/")?;
/// assert_eq!(prefix.as_str(), "renovate/");
///
/// assert!(BranchPrefix::try_new("has space/").is_err());
/// assert!(BranchPrefix::try_new("dots../").is_err());
/// # Ok::<(), renovate_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BranchPrefix(String);

impl BranchPrefix {
    /// Create a new BranchPrefix from a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidConfiguration` if the prefix is
    /// not a valid branch-name segment.
    pub fn try_new(prefix: impl Into<String>) -> ConfigurationResult<Self> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(Self::invalid("branch prefix cannot be empty"));
        }

        if prefix.starts_with('/') {
            return Err(Self::invalid("branch prefix cannot start with '/'"));
        }

        if prefix.contains("..") || prefix.contains("@{") {
            return Err(Self::invalid(
                "branch prefix cannot contain '..' or '@{' sequences",
            ));
        }

        if let Some(c) = prefix
            .chars()
            .find(|c| c.is_whitespace() || c.is_ascii_control() || "~^:?*[\\".contains(*c))
        {
            return Err(Self::invalid(&format!(
                "branch prefix contains forbidden character {:?}",
                c
            )));
        }

        Ok(Self(prefix))
    }

    fn invalid(reason: &str) -> ConfigurationError {
        ConfigurationError::InvalidConfiguration {
            field: "branchPrefix".to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BranchPrefix {
    /// The conventional `renovate/` prefix used when the field is omitted.
    fn default() -> Self {
        Self("renovate/".to_string())
    }
}

impl fmt::Display for BranchPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "branch_prefix_tests.rs"]
mod tests;

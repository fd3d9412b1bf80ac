//! Repository identifier validation.
//!
//! Provides a branded type for fully-qualified `owner/name` repository
//! identifiers so a malformed entry is caught at load time rather than when
//! the runtime first calls the platform API.

use serde::Serialize;
use std::fmt;

use crate::errors::{ConfigurationError, ConfigurationResult};

/// A validated `owner/name` repository identifier.
///
/// Repository identifiers must:
/// - Contain exactly one `/` separating a non-empty owner and name
/// - Use only alphanumeric characters, `.`, `_`, and `-` in each segment
/// - Not use `.` or `..` as a segment
///
/// # Examples
///
/// ```rust
/// use renovate_config::RepositoryId;
///
/// let repo = RepositoryId::try_new("bitctrl/com.bitctrl")?;
/// assert_eq!(repo.owner(), "bitctrl");
/// assert_eq!(repo.name(), "com.bitctrl");
///
/// assert!(RepositoryId::try_new("no-slash").is_err());
/// assert!(RepositoryId::try_new("too/many/slashes").is_err());
/// assert!(RepositoryId::try_new("owner/").is_err());
/// # Ok::<(), renovate_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RepositoryId(String);

impl RepositoryId {
    /// Create a new RepositoryId from a string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidConfiguration` if the identifier
    /// is not a well-formed `owner/name` pair.
    pub fn try_new(id: impl Into<String>) -> ConfigurationResult<Self> {
        let id = id.into();

        let (owner, name) = match id.split_once('/') {
            Some(parts) => parts,
            None => {
                return Err(Self::invalid(&id, "expected 'owner/name' format"));
            }
        };

        if name.contains('/') {
            return Err(Self::invalid(&id, "expected exactly one '/' separator"));
        }

        for (label, segment) in [("owner", owner), ("name", name)] {
            if segment.is_empty() {
                return Err(Self::invalid(&id, &format!("{} segment is empty", label)));
            }
            if segment == "." || segment == ".." {
                return Err(Self::invalid(
                    &id,
                    &format!("{} segment '{}' is reserved", label, segment),
                ));
            }
            if !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
            {
                return Err(Self::invalid(
                    &id,
                    &format!(
                        "{} segment '{}' contains invalid characters (only letters, digits, '.', '_', and '-' allowed)",
                        label, segment
                    ),
                ));
            }
        }

        Ok(Self(id))
    }

    fn invalid(id: &str, reason: &str) -> ConfigurationError {
        ConfigurationError::InvalidConfiguration {
            field: "repositories".to_string(),
            reason: format!("malformed repository identifier '{}': {}", id, reason),
        }
    }

    /// The owner (user or organization) segment.
    pub fn owner(&self) -> &str {
        match self.0.split_once('/') {
            Some((owner, _)) => owner,
            None => &self.0,
        }
    }

    /// The repository name segment.
    pub fn name(&self) -> &str {
        match self.0.split_once('/') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }

    /// The full `owner/name` identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "repository_id_tests.rs"]
mod tests;

//! Update-type tags.
//!
//! Classifies a proposed dependency version change. Package rules filter on
//! these tags via `matchUpdateTypes`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ConfigurationError, ConfigurationResult};

/// Classification of a version change proposed by the bot.
///
/// # Examples
///
/// ```rust
/// use renovate_config::UpdateType;
///
/// let tag: UpdateType = "lockFileMaintenance".parse()?;
/// assert_eq!(tag, UpdateType::LockFileMaintenance);
/// assert_eq!(tag.as_str(), "lockFileMaintenance");
/// # Ok::<(), renovate_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateType {
    /// Pinning a range to an exact version.
    Pin,
    /// Updating a pinned content digest.
    Digest,
    Patch,
    Minor,
    Major,
    /// Refreshing the lock file without changing manifests.
    LockFileMaintenance,
}

impl UpdateType {
    /// All update-type tags the runtime currently emits.
    pub const ALL: [UpdateType; 6] = [
        UpdateType::Pin,
        UpdateType::Digest,
        UpdateType::Patch,
        UpdateType::Minor,
        UpdateType::Major,
        UpdateType::LockFileMaintenance,
    ];

    /// The wire tag for this update type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pin => "pin",
            Self::Digest => "digest",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::LockFileMaintenance => "lockFileMaintenance",
        }
    }

    /// Comma-separated list of known tags, for error messages.
    pub fn supported_values() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> ConfigurationResult<Self> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| ConfigurationError::InvalidConfiguration {
                field: "matchUpdateTypes".to_string(),
                reason: format!(
                    "unknown update type '{}' (known: {})",
                    s,
                    Self::supported_values()
                ),
            })
    }
}

#[cfg(test)]
#[path = "update_type_tests.rs"]
mod tests;

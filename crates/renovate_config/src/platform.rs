//! Hosting platform identifiers.
//!
//! The `platform` field selects which forge API the bot runtime talks to.
//! The set of identifiers tracks the platforms the runtime supports; adding a
//! variant here is a backwards-compatible extension for existing documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ConfigurationError, ConfigurationResult};

/// A hosting platform supported by the bot runtime.
///
/// # Examples
///
/// ```rust
/// use renovate_config::Platform;
///
/// let platform: Platform = "github".parse()?;
/// assert_eq!(platform, Platform::Github);
/// assert_eq!(platform.as_str(), "github");
///
/// assert!("not-a-real-platform".parse::<Platform>().is_err());
/// # Ok::<(), renovate_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Azure,
    Bitbucket,
    BitbucketServer,
    Codecommit,
    Gitea,
    Github,
    Gitlab,
    Local,
}

impl Platform {
    /// All platform identifiers the runtime currently supports.
    pub const ALL: [Platform; 8] = [
        Platform::Azure,
        Platform::Bitbucket,
        Platform::BitbucketServer,
        Platform::Codecommit,
        Platform::Gitea,
        Platform::Github,
        Platform::Gitlab,
        Platform::Local,
    ];

    /// The wire identifier for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Bitbucket => "bitbucket",
            Self::BitbucketServer => "bitbucket-server",
            Self::Codecommit => "codecommit",
            Self::Gitea => "gitea",
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Local => "local",
        }
    }

    /// Comma-separated list of supported identifiers, for error messages.
    pub fn supported_values() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> ConfigurationResult<Self> {
        Self::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| ConfigurationError::InvalidConfiguration {
                field: "platform".to_string(),
                reason: format!(
                    "unsupported platform '{}' (supported: {})",
                    s,
                    Self::supported_values()
                ),
            })
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;

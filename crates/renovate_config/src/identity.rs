//! Bot actor identity.
//!
//! The identity the bot commits and opens pull requests as. On the wire these
//! are the top-level `username` and `gitAuthor` fields; they are grouped here
//! because they always travel together.

use serde::Serialize;
use std::fmt;

use crate::errors::{ConfigurationError, ConfigurationResult};

/// The actor identity used for commits and PRs created by the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotIdentity {
    /// Platform account name the bot authenticates as.
    pub username: String,
    /// Git author signature applied to bot commits.
    pub git_author: GitAuthor,
}

impl BotIdentity {
    /// Create a new identity from a username and a `Name <email>` signature.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidConfiguration` if the username is
    /// empty or the signature is malformed.
    pub fn try_new(
        username: impl Into<String>,
        git_author: impl Into<String>,
    ) -> ConfigurationResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfiguration {
                field: "username".to_string(),
                reason: "username cannot be empty".to_string(),
            });
        }

        Ok(Self {
            username,
            git_author: GitAuthor::try_new(git_author)?,
        })
    }
}

/// A validated `Name <email>` Git author signature.
///
/// # Examples
///
/// ```rust
/// use renovate_config::GitAuthor;
///
/// let author = GitAuthor::try_new("Renovate Bot <bot@renovateapp.com>")?;
/// assert_eq!(author.name(), "Renovate Bot");
/// assert_eq!(author.email(), "bot@renovateapp.com");
///
/// assert!(GitAuthor::try_new("no-angle-brackets").is_err());
/// assert!(GitAuthor::try_new("<bot@renovateapp.com>").is_err());
/// # Ok::<(), renovate_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GitAuthor(String);

impl GitAuthor {
    /// Create a new GitAuthor from a `Name <email>` string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidConfiguration` if the signature
    /// lacks a name, angle-bracketed email, or a plausible address.
    pub fn try_new(signature: impl Into<String>) -> ConfigurationResult<Self> {
        let signature = signature.into();
        let trimmed = signature.trim();

        let (name, rest) = match trimmed.split_once('<') {
            Some(parts) => parts,
            None => {
                return Err(Self::invalid(
                    "expected 'Name <email>' format with an angle-bracketed address",
                ));
            }
        };

        if name.trim().is_empty() {
            return Err(Self::invalid("author name cannot be empty"));
        }

        let email = match rest.strip_suffix('>') {
            Some(email) => email,
            None => {
                return Err(Self::invalid("address must end with '>'"));
            }
        };

        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        };
        if !valid_email {
            return Err(Self::invalid(&format!(
                "'{}' is not a plausible email address",
                email
            )));
        }

        Ok(Self(signature))
    }

    fn invalid(reason: &str) -> ConfigurationError {
        ConfigurationError::InvalidConfiguration {
            field: "gitAuthor".to_string(),
            reason: reason.to_string(),
        }
    }

    /// The author name part of the signature.
    pub fn name(&self) -> &str {
        match self.0.trim().split_once('<') {
            Some((name, _)) => name.trim(),
            None => self.0.trim(),
        }
    }

    /// The email address part of the signature.
    pub fn email(&self) -> &str {
        let trimmed = self.0.trim();
        match trimmed.split_once('<') {
            Some((_, rest)) => rest.strip_suffix('>').unwrap_or(rest),
            None => trimmed,
        }
    }

    /// The full signature as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GitAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;

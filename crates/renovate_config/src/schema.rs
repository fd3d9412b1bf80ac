//! The configuration document.
//!
//! The top-level record the bot runtime reads once per run. Construction
//! goes through [`crate::loader::DocumentLoader`], which enforces every field
//! invariant; after that the document is immutable for the run's duration.
//!
//! Serialization emits the same camelCase wire form the loader accepts, so
//! `load → serialize → load` yields a structurally identical document.

use serde::Serialize;
use url::Url;

use crate::branch_prefix::BranchPrefix;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::identity::BotIdentity;
use crate::platform::Platform;
use crate::repository_id::RepositoryId;
use crate::rules::PackageRule;

/// A validated bot configuration document.
///
/// # Examples
///
/// ```rust
/// use renovate_config::{DocumentLoader, Platform};
///
/// let document = DocumentLoader::load_from_str(
///     r#"{
///         "platform": "github",
///         "username": "renovate-release",
///         "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
///         "repositories": ["bitctrl/com.bitctrl"]
///     }"#,
/// )?;
///
/// assert_eq!(document.platform, Platform::Github);
/// assert_eq!(document.branch_prefix.as_str(), "renovate/");
/// assert!(!document.dry_run);
/// # Ok::<(), renovate_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationDocument {
    /// Prefix prepended to all automatically created update branches.
    pub branch_prefix: BranchPrefix,

    /// When `true`, the runtime simulates actions without mutating remote state.
    pub dry_run: bool,

    /// Actor identity for commits and PRs (wire fields `username`, `gitAuthor`).
    #[serde(flatten)]
    pub identity: BotIdentity,

    /// Whether to propose an initial setup PR to repositories lacking config.
    pub onboarding: bool,

    /// Which hosting platform API the runtime targets.
    pub platform: Platform,

    /// Base URL of the platform API, for self-hosted forges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Url>,

    /// Whether forked repositories are in scope for processing.
    pub include_forks: bool,

    /// Repositories to operate on. Never empty.
    pub repositories: Vec<RepositoryId>,

    /// Ordered rule cascade, evaluated by [`resolve_rule`](Self::resolve_rule).
    pub package_rules: Vec<PackageRule>,
}

impl ConfigurationDocument {
    /// Serialize the document back to its pretty-printed JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::SerializeError` if JSON serialization
    /// fails.
    pub fn to_json_string(&self) -> ConfigurationResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigurationError::SerializeError {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

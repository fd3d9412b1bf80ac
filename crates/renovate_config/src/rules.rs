//! Package rules.
//!
//! A package rule is a filter plus a set of action overrides. Rules are kept
//! in document order and evaluated as a cascade: every matching rule's
//! present action fields overwrite the accumulated action, so later rules win
//! per field. The cascade itself lives in [`crate::resolver`].

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::resolver::UpdateCandidate;
use crate::update_type::UpdateType;

/// A pattern matched against candidate package names.
///
/// A plain string matches the package name exactly. A `/…/`-delimited string
/// is compiled as a regular expression at load time, so a bad expression is a
/// validation error rather than a silent non-match at resolution time.
///
/// Equality and serialization use the raw source string, which keeps
/// documents lossless under a serialize/reload round trip.
///
/// # Examples
///
/// ```rust
/// use renovate_config::PackagePattern;
///
/// let exact = PackagePattern::try_new("renovatebot/github-action")?;
/// assert!(exact.matches("renovatebot/github-action"));
/// assert!(!exact.matches("renovatebot/github-action-fork"));
///
/// let pattern = PackagePattern::try_new("/^renovatebot\\//")?;
/// assert!(pattern.matches("renovatebot/github-action"));
/// assert!(!pattern.matches("actions/checkout"));
/// # Ok::<(), renovate_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PackagePattern {
    raw: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact,
    Regex(Regex),
}

impl PackagePattern {
    /// Create a pattern from its raw configuration string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidConfiguration` if the pattern is
    /// empty or a `/…/` pattern fails to compile.
    pub fn try_new(raw: impl Into<String>) -> ConfigurationResult<Self> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(ConfigurationError::InvalidConfiguration {
                field: "matchPackageNames".to_string(),
                reason: "package name pattern cannot be empty".to_string(),
            });
        }

        let matcher = if raw.len() > 2 && raw.starts_with('/') && raw.ends_with('/') {
            let source = &raw[1..raw.len() - 1];
            let regex =
                Regex::new(source).map_err(|e| ConfigurationError::InvalidConfiguration {
                    field: "matchPackageNames".to_string(),
                    reason: format!("invalid regular expression '{}': {}", source, e),
                })?;
            Matcher::Regex(regex)
        } else {
            Matcher::Exact
        };

        Ok(Self { raw, matcher })
    }

    /// Check whether this pattern matches a candidate package name.
    pub fn matches(&self, package_name: &str) -> bool {
        match &self.matcher {
            Matcher::Exact => self.raw == package_name,
            Matcher::Regex(regex) => regex.is_match(package_name),
        }
    }

    /// The raw pattern string as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for PackagePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for PackagePattern {}

impl fmt::Display for PackagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PackagePattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

/// A single entry in the `packageRules` cascade.
///
/// Match predicates that are present must all hold for the rule to apply; a
/// rule with no predicates matches every candidate. Action fields that are
/// present override the accumulated action for matching candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRule {
    /// Documentation only, no runtime effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Update-type tags this rule applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_update_types: Option<Vec<UpdateType>>,

    /// Package name patterns this rule applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_package_names: Option<Vec<PackagePattern>>,

    /// When `false`, matched updates bypass dependency dashboard approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_dashboard_approval: Option<bool>,

    /// Minimum age in days before a matched update is proposed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability_days: Option<u32>,

    /// When `true`, matched updates merge without review once checks pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automerge: Option<bool>,
}

impl PackageRule {
    /// Check whether this rule applies to an update candidate.
    ///
    /// Every present predicate must hold; an absent predicate matches all.
    pub fn matches(&self, candidate: &UpdateCandidate) -> bool {
        if let Some(types) = &self.match_update_types {
            if !types.contains(&candidate.update_type) {
                return false;
            }
        }

        if let Some(patterns) = &self.match_package_names {
            if !patterns.iter().any(|p| p.matches(&candidate.package_name)) {
                return false;
            }
        }

        true
    }

    /// Whether any match predicate is present.
    pub fn has_match_predicates(&self) -> bool {
        self.match_update_types.is_some() || self.match_package_names.is_some()
    }

    /// Whether any action field is present.
    pub fn has_action_fields(&self) -> bool {
        self.dependency_dashboard_approval.is_some()
            || self.stability_days.is_some()
            || self.automerge.is_some()
    }

    /// A rule with neither predicates nor actions does nothing and is flagged
    /// as a likely author error at load time.
    pub fn is_noop(&self) -> bool {
        !self.has_match_predicates() && !self.has_action_fields()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;

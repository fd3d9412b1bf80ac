//! Package rule cascade resolution.
//!
//! Resolving an update candidate is an explicit fold over `packageRules` in
//! document order: start from the default action, and let every matching
//! rule's present action fields overwrite the accumulator. Later matching
//! rules therefore win per field, and a rule that leaves a field unset leaves
//! the accumulated value untouched.
//!
//! Resolution is total: it cannot fail for any validated document and any
//! candidate.

use chrono::{DateTime, Duration, Utc};

use crate::schema::ConfigurationDocument;
use crate::update_type::UpdateType;

/// A proposed dependency version bump, as seen by the rule cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCandidate {
    /// Package name the update applies to.
    pub package_name: String,
    /// Classification of the version change.
    pub update_type: UpdateType,
}

impl UpdateCandidate {
    /// Create a new update candidate.
    pub fn new(package_name: impl Into<String>, update_type: UpdateType) -> Self {
        Self {
            package_name: package_name.into(),
            update_type,
        }
    }
}

/// The merged action for one update candidate after the cascade.
///
/// The default action is the runtime's documented behavior when no rule
/// matches: updates require dashboard approval, have no minimum age, and are
/// never automerged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAction {
    /// Whether the update waits for dependency dashboard approval.
    pub dependency_dashboard_approval: bool,
    /// Minimum age in days since release before the update is proposed.
    pub stability_days: u32,
    /// Whether the update merges without review once checks pass.
    pub automerge: bool,
}

impl Default for ResolvedAction {
    fn default() -> Self {
        Self {
            dependency_dashboard_approval: true,
            stability_days: 0,
            automerge: false,
        }
    }
}

impl ResolvedAction {
    /// The instant at which a release becomes old enough to propose.
    pub fn stable_at(&self, released_at: DateTime<Utc>) -> DateTime<Utc> {
        released_at + Duration::days(i64::from(self.stability_days))
    }

    /// Check whether a release has satisfied the stability-days gate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use renovate_config::ResolvedAction;
    ///
    /// let action = ResolvedAction {
    ///     stability_days: 3,
    ///     ..Default::default()
    /// };
    ///
    /// let released = Utc::now() - Duration::days(5);
    /// assert!(action.is_stable_at(released, Utc::now()));
    ///
    /// let fresh = Utc::now() - Duration::hours(6);
    /// assert!(!action.is_stable_at(fresh, Utc::now()));
    /// ```
    pub fn is_stable_at(&self, released_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now >= self.stable_at(released_at)
    }
}

impl ConfigurationDocument {
    /// Resolve the final action for an update candidate.
    ///
    /// Evaluates `packageRules` in order, accumulating action-field overrides
    /// from every matching rule (last match wins per field). Returns the
    /// default action when no rule matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use renovate_config::{DocumentLoader, UpdateCandidate, UpdateType};
    ///
    /// let document = DocumentLoader::load_from_str(
    ///     r#"{
    ///         "platform": "github",
    ///         "username": "renovate-release",
    ///         "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
    ///         "repositories": ["bitctrl/com.bitctrl"],
    ///         "packageRules": [
    ///             { "matchUpdateTypes": ["patch"], "automerge": false },
    ///             { "matchUpdateTypes": ["patch"], "automerge": true }
    ///         ]
    ///     }"#,
    /// )?;
    ///
    /// let patch = UpdateCandidate::new("some/package", UpdateType::Patch);
    /// assert!(document.resolve_rule(&patch).automerge);
    ///
    /// let major = UpdateCandidate::new("some/package", UpdateType::Major);
    /// assert!(!document.resolve_rule(&major).automerge);
    /// # Ok::<(), renovate_config::ConfigurationError>(())
    /// ```
    pub fn resolve_rule(&self, candidate: &UpdateCandidate) -> ResolvedAction {
        self.package_rules
            .iter()
            .filter(|rule| rule.matches(candidate))
            .fold(ResolvedAction::default(), |mut action, rule| {
                if let Some(value) = rule.dependency_dashboard_approval {
                    action.dependency_dashboard_approval = value;
                }
                if let Some(value) = rule.stability_days {
                    action.stability_days = value;
                }
                if let Some(value) = rule.automerge {
                    action.automerge = value;
                }
                action
            })
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

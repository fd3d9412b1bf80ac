//! Document loading and validation.
//!
//! Loading is two-stage and eager. The JSON wire form is first deserialized
//! into a permissive raw shape (every field optional, enumerations as plain
//! strings), then every invariant is checked in a single pass that collects
//! all field-level errors before the load fails. This way the author sees
//! every offending field at once, and all structural errors surface before
//! the runtime attempts any remote action.
//!
//! Unknown top-level options and no-op package rules are advisory: they are
//! reported as warnings and logged, never rejected.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

use crate::branch_prefix::BranchPrefix;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::identity::{BotIdentity, GitAuthor};
use crate::platform::Platform;
use crate::repository_id::RepositoryId;
use crate::rules::{PackagePattern, PackageRule};
use crate::schema::ConfigurationDocument;
use crate::update_type::UpdateType;
use crate::validation::{
    ValidationError, ValidationErrorType, ValidationResult, ValidationWarning,
};

/// Loads and validates configuration documents.
///
/// # Examples
///
/// ```rust
/// use renovate_config::DocumentLoader;
///
/// let error = DocumentLoader::load_from_str(
///     r#"{
///         "platform": "not-a-real-platform",
///         "username": "renovate-release",
///         "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
///         "repositories": ["bitctrl/com.bitctrl"]
///     }"#,
/// )
/// .unwrap_err();
///
/// assert!(error.to_string().contains("validation failed"));
/// ```
pub struct DocumentLoader;

impl DocumentLoader {
    /// Load and validate a configuration document from a file.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `FileAccessError` for I/O problems, and
    /// otherwise the same errors as [`load_from_str`](Self::load_from_str).
    pub fn load_from_path(path: impl AsRef<Path>) -> ConfigurationResult<ConfigurationDocument> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigurationError::FileAccessError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::load_from_str(&content)
    }

    /// Load and validate a configuration document from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the content is not valid JSON, or
    /// `ValidationFailed` carrying every field-level error found. Warnings
    /// (unknown options, no-op rules) are logged and do not fail the load.
    pub fn load_from_str(content: &str) -> ConfigurationResult<ConfigurationDocument> {
        let raw: RawDocument =
            serde_json::from_str(content).map_err(|e| ConfigurationError::ParseError {
                reason: e.to_string(),
            })?;

        let (document, result) = validate(raw);

        for warning in &result.warnings {
            warn!(field = %warning.field_path, "{}", warning.message);
        }

        match document {
            Some(document) => {
                debug!(
                    platform = %document.platform,
                    repositories = document.repositories.len(),
                    rules = document.package_rules.len(),
                    "configuration document loaded"
                );
                Ok(document)
            }
            None => Err(ConfigurationError::validation_failed(result.errors)),
        }
    }

    /// Validate a document without constructing it.
    ///
    /// Returns the full set of errors and warnings, for advisory tooling
    /// that wants to report problems rather than load the document.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the content is not valid JSON.
    pub fn check_str(content: &str) -> ConfigurationResult<ValidationResult> {
        let raw: RawDocument =
            serde_json::from_str(content).map_err(|e| ConfigurationError::ParseError {
                reason: e.to_string(),
            })?;

        let (_, result) = validate(raw);
        Ok(result)
    }
}

/// Permissive wire shape of the document, before invariant checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    branch_prefix: Option<String>,
    dry_run: Option<bool>,
    username: Option<String>,
    git_author: Option<String>,
    onboarding: Option<bool>,
    platform: Option<String>,
    endpoint: Option<String>,
    include_forks: Option<bool>,
    repositories: Option<Vec<String>>,
    package_rules: Option<Vec<RawPackageRule>>,

    // Everything the schema doesn't know about, reported as warnings.
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Permissive wire shape of a package rule.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackageRule {
    description: Option<String>,
    match_update_types: Option<Vec<String>>,
    match_package_names: Option<Vec<String>>,
    dependency_dashboard_approval: Option<bool>,
    stability_days: Option<i64>,
    automerge: Option<bool>,

    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Validate a raw document, collecting every error and warning in one pass.
///
/// The document is constructed only when no errors were found.
fn validate(raw: RawDocument) -> (Option<ConfigurationDocument>, ValidationResult) {
    let mut result = ValidationResult::new();

    for key in raw.extra.keys() {
        result.add_warning(unknown_option(key.clone()));
    }

    let branch_prefix = match raw.branch_prefix {
        None => Some(BranchPrefix::default()),
        Some(value) => collect_field(&mut result, "branchPrefix", BranchPrefix::try_new(value)),
    };

    let username = match raw.username {
        None => {
            result.add_error(required_field("username"));
            None
        }
        Some(value) if value.trim().is_empty() => {
            result.add_error(invalid_value("username", "username cannot be empty", None));
            None
        }
        Some(value) => Some(value),
    };

    let git_author = match raw.git_author {
        None => {
            result.add_error(required_field("gitAuthor"));
            None
        }
        Some(value) => collect_field(&mut result, "gitAuthor", GitAuthor::try_new(value)),
    };

    let platform = match raw.platform {
        None => {
            result.add_error(required_field("platform"));
            None
        }
        Some(value) => match value.parse::<Platform>() {
            Ok(platform) => Some(platform),
            Err(_) => {
                result.add_error(invalid_value(
                    "platform",
                    format!("unsupported platform '{}'", value),
                    Some(format!("use one of: {}", Platform::supported_values())),
                ));
                None
            }
        },
    };

    let endpoint = match raw.endpoint {
        None => Some(None),
        Some(value) => match Url::parse(&value) {
            Ok(url) => Some(Some(url)),
            Err(e) => {
                result.add_error(invalid_value(
                    "endpoint",
                    format!("'{}' is not a valid URL: {}", value, e),
                    None,
                ));
                None
            }
        },
    };

    let repositories = validate_repositories(&mut result, raw.repositories);
    let package_rules = validate_rules(&mut result, raw.package_rules.unwrap_or_default());

    let document = match (
        branch_prefix,
        username,
        git_author,
        platform,
        endpoint,
        repositories,
        package_rules,
    ) {
        (
            Some(branch_prefix),
            Some(username),
            Some(git_author),
            Some(platform),
            Some(endpoint),
            Some(repositories),
            Some(package_rules),
        ) if result.is_valid() => Some(ConfigurationDocument {
            branch_prefix,
            dry_run: raw.dry_run.unwrap_or(false),
            identity: BotIdentity {
                username,
                git_author,
            },
            onboarding: raw.onboarding.unwrap_or(true),
            platform,
            endpoint,
            include_forks: raw.include_forks.unwrap_or(false),
            repositories,
            package_rules,
        }),
        _ => None,
    };

    (document, result)
}

fn validate_repositories(
    result: &mut ValidationResult,
    raw: Option<Vec<String>>,
) -> Option<Vec<RepositoryId>> {
    let entries = match raw {
        None => {
            result.add_error(required_field("repositories"));
            return None;
        }
        Some(entries) => entries,
    };

    if entries.is_empty() {
        result.add_error(invalid_value(
            "repositories",
            "must list at least one repository",
            Some("add at least one 'owner/name' entry".to_string()),
        ));
        return None;
    }

    let mut repositories = Vec::with_capacity(entries.len());
    let mut ok = true;
    for (index, entry) in entries.into_iter().enumerate() {
        let field_path = format!("repositories[{}]", index);
        match collect_field(result, &field_path, RepositoryId::try_new(entry)) {
            Some(repository) => repositories.push(repository),
            None => ok = false,
        }
    }

    ok.then_some(repositories)
}

fn validate_rules(
    result: &mut ValidationResult,
    raw_rules: Vec<RawPackageRule>,
) -> Option<Vec<PackageRule>> {
    let mut rules = Vec::with_capacity(raw_rules.len());
    let mut ok = true;

    for (index, raw_rule) in raw_rules.into_iter().enumerate() {
        match validate_rule(result, index, raw_rule) {
            Some(rule) => {
                if rule.is_noop() {
                    result.add_warning(ValidationWarning {
                        field_path: format!("packageRules[{}]", index),
                        message: "rule has no match predicates and no action fields; it has no effect"
                            .to_string(),
                        recommendation: Some(
                            "add a match predicate or an action field, or remove the rule"
                                .to_string(),
                        ),
                    });
                }
                rules.push(rule);
            }
            None => ok = false,
        }
    }

    ok.then_some(rules)
}

fn validate_rule(
    result: &mut ValidationResult,
    index: usize,
    raw: RawPackageRule,
) -> Option<PackageRule> {
    let mut ok = true;

    for key in raw.extra.keys() {
        result.add_warning(unknown_option(format!("packageRules[{}].{}", index, key)));
    }

    let match_update_types = match raw.match_update_types {
        None => None,
        Some(tags) => {
            let mut parsed = Vec::with_capacity(tags.len());
            for (tag_index, tag) in tags.iter().enumerate() {
                match tag.parse::<UpdateType>() {
                    Ok(update_type) => parsed.push(update_type),
                    Err(_) => {
                        ok = false;
                        result.add_error(invalid_value(
                            format!("packageRules[{}].matchUpdateTypes[{}]", index, tag_index),
                            format!("unknown update type '{}'", tag),
                            Some(format!("use one of: {}", UpdateType::supported_values())),
                        ));
                    }
                }
            }
            Some(parsed)
        }
    };

    let match_package_names = match raw.match_package_names {
        None => None,
        Some(patterns) => {
            let mut parsed = Vec::with_capacity(patterns.len());
            for (pattern_index, pattern) in patterns.into_iter().enumerate() {
                let field_path =
                    format!("packageRules[{}].matchPackageNames[{}]", index, pattern_index);
                match collect_field(result, &field_path, PackagePattern::try_new(pattern)) {
                    Some(pattern) => parsed.push(pattern),
                    None => ok = false,
                }
            }
            Some(parsed)
        }
    };

    let stability_days = match raw.stability_days {
        None => None,
        Some(days) => match u32::try_from(days) {
            Ok(days) => Some(days),
            Err(_) => {
                ok = false;
                result.add_error(invalid_value(
                    format!("packageRules[{}].stabilityDays", index),
                    format!("must be a non-negative integer, got {}", days),
                    None,
                ));
                None
            }
        },
    };

    if !ok {
        return None;
    }

    Some(PackageRule {
        description: raw.description,
        match_update_types,
        match_package_names,
        dependency_dashboard_approval: raw.dependency_dashboard_approval,
        stability_days,
        automerge: raw.automerge,
    })
}

/// Record a branded-type construction failure against a field path.
fn collect_field<T>(
    result: &mut ValidationResult,
    field_path: &str,
    value: ConfigurationResult<T>,
) -> Option<T> {
    match value {
        Ok(value) => Some(value),
        Err(error) => {
            let message = match error {
                ConfigurationError::InvalidConfiguration { reason, .. } => reason,
                other => other.to_string(),
            };
            result.add_error(ValidationError {
                error_type: ValidationErrorType::InvalidValue,
                field_path: field_path.to_string(),
                message,
                suggestion: None,
            });
            None
        }
    }
}

fn required_field(field_path: &str) -> ValidationError {
    ValidationError {
        error_type: ValidationErrorType::RequiredFieldMissing,
        field_path: field_path.to_string(),
        message: format!("required field '{}' is missing", field_path),
        suggestion: None,
    }
}

fn invalid_value(
    field_path: impl Into<String>,
    message: impl Into<String>,
    suggestion: Option<String>,
) -> ValidationError {
    ValidationError {
        error_type: ValidationErrorType::InvalidValue,
        field_path: field_path.into(),
        message: message.into(),
        suggestion,
    }
}

fn unknown_option(field_path: String) -> ValidationWarning {
    ValidationWarning {
        message: format!("unrecognized option '{}'", field_path),
        field_path,
        recommendation: Some("remove it or check the option name".to_string()),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

//! Tests for document loading and validation.

use super::*;
use std::io::Write;

/// The bitctrl configuration this crate was built around.
const BITCTRL_DOCUMENT: &str = r#"{
    "branchPrefix": "renovate/",
    "dryRun": false,
    "username": "renovate-release",
    "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
    "onboarding": true,
    "platform": "github",
    "includeForks": true,
    "repositories": ["bitctrl/com.bitctrl"],
    "packageRules": [
        {
            "description": "lockFileMaintenance",
            "matchUpdateTypes": ["pin", "digest", "patch", "minor", "major", "lockFileMaintenance"],
            "dependencyDashboardApproval": false,
            "stabilityDays": 0
        },
        {
            "matchPackageNames": ["renovatebot/github-action"],
            "matchUpdateTypes": ["minor", "patch", "pin", "digest"],
            "automerge": true
        }
    ]
}"#;

fn find_error<'a>(error: &'a ConfigurationError, field_path: &str) -> &'a ValidationError {
    match error {
        ConfigurationError::ValidationFailed { errors, .. } => errors
            .iter()
            .find(|e| e.field_path == field_path)
            .unwrap_or_else(|| panic!("no error for field '{}' in {:?}", field_path, errors)),
        other => panic!("Expected ValidationFailed, got {:?}", other),
    }
}

// ============================================================================
// Successful loads
// ============================================================================

#[test]
fn test_load_bitctrl_document() {
    let document = DocumentLoader::load_from_str(BITCTRL_DOCUMENT).unwrap();

    assert_eq!(document.branch_prefix.as_str(), "renovate/");
    assert!(!document.dry_run);
    assert_eq!(document.identity.username, "renovate-release");
    assert_eq!(document.identity.git_author.email(), "bot@renovateapp.com");
    assert!(document.onboarding);
    assert_eq!(document.platform, Platform::Github);
    assert!(document.include_forks);
    assert_eq!(document.repositories.len(), 1);
    assert_eq!(document.repositories[0].as_str(), "bitctrl/com.bitctrl");
    assert_eq!(document.package_rules.len(), 2);

    let first = &document.package_rules[0];
    assert_eq!(first.description.as_deref(), Some("lockFileMaintenance"));
    assert_eq!(
        first.match_update_types.as_ref().map(Vec::len),
        Some(UpdateType::ALL.len())
    );
    assert_eq!(first.dependency_dashboard_approval, Some(false));
    assert_eq!(first.stability_days, Some(0));
    assert_eq!(first.automerge, None);

    let second = &document.package_rules[1];
    assert_eq!(second.automerge, Some(true));
    assert_eq!(second.dependency_dashboard_approval, None);
}

/// Omitted optional fields take the runtime's documented defaults.
#[test]
fn test_minimal_document_applies_defaults() {
    let document = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl"]
        }"#,
    )
    .unwrap();

    assert_eq!(document.branch_prefix.as_str(), "renovate/");
    assert!(!document.dry_run);
    assert!(document.onboarding);
    assert!(!document.include_forks);
    assert!(document.endpoint.is_none());
    assert!(document.package_rules.is_empty());
}

#[test]
fn test_endpoint_is_parsed_as_url() {
    let document = DocumentLoader::load_from_str(
        r#"{
            "platform": "gitlab",
            "endpoint": "https://gitlab.example.com/api/v4/",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["group/project"]
        }"#,
    )
    .unwrap();

    let endpoint = document.endpoint.unwrap();
    assert_eq!(endpoint.host_str(), Some("gitlab.example.com"));
}

// ============================================================================
// Parse failures
// ============================================================================

#[test]
fn test_invalid_json_is_a_parse_error() {
    let error = DocumentLoader::load_from_str("module.exports = {}").unwrap_err();
    assert!(matches!(error, ConfigurationError::ParseError { .. }));
}

#[test]
fn test_wrong_field_type_is_a_parse_error() {
    let error = DocumentLoader::load_from_str(r#"{ "dryRun": "yes" }"#).unwrap_err();
    assert!(matches!(error, ConfigurationError::ParseError { .. }));
}

// ============================================================================
// Validation failures
// ============================================================================

#[test]
fn test_missing_required_fields_are_all_reported() {
    let error = DocumentLoader::load_from_str("{}").unwrap_err();

    for field in ["platform", "username", "gitAuthor", "repositories"] {
        let field_error = find_error(&error, field);
        assert_eq!(field_error.error_type, ValidationErrorType::RequiredFieldMissing);
    }
}

#[test]
fn test_unsupported_platform_names_the_field() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "not-a-real-platform",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl"]
        }"#,
    )
    .unwrap_err();

    let field_error = find_error(&error, "platform");
    assert_eq!(field_error.error_type, ValidationErrorType::InvalidValue);
    assert!(field_error.message.contains("not-a-real-platform"));
    assert!(
        field_error.suggestion.as_ref().unwrap().contains("github"),
        "suggestion should list supported platforms"
    );
}

#[test]
fn test_empty_repositories_is_rejected() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": []
        }"#,
    )
    .unwrap_err();

    let field_error = find_error(&error, "repositories");
    assert!(field_error.message.contains("at least one"));
}

#[test]
fn test_malformed_repository_entry_is_indexed() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl", "not-qualified"]
        }"#,
    )
    .unwrap_err();

    let field_error = find_error(&error, "repositories[1]");
    assert!(field_error.message.contains("not-qualified"));
}

#[test]
fn test_invalid_branch_prefix_is_rejected() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "branchPrefix": "has space/",
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl"]
        }"#,
    )
    .unwrap_err();

    find_error(&error, "branchPrefix");
}

#[test]
fn test_malformed_git_author_is_rejected() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "bot@renovateapp.com",
            "repositories": ["bitctrl/com.bitctrl"]
        }"#,
    )
    .unwrap_err();

    find_error(&error, "gitAuthor");
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "endpoint": "not a url",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl"]
        }"#,
    )
    .unwrap_err();

    find_error(&error, "endpoint");
}

#[test]
fn test_unknown_update_type_is_indexed() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl"],
            "packageRules": [
                { "matchUpdateTypes": ["patch", "hotfix"], "automerge": true }
            ]
        }"#,
    )
    .unwrap_err();

    let field_error = find_error(&error, "packageRules[0].matchUpdateTypes[1]");
    assert!(field_error.message.contains("hotfix"));
}

#[test]
fn test_negative_stability_days_is_rejected() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl"],
            "packageRules": [
                { "matchUpdateTypes": ["major"], "stabilityDays": -3 }
            ]
        }"#,
    )
    .unwrap_err();

    let field_error = find_error(&error, "packageRules[0].stabilityDays");
    assert!(field_error.message.contains("-3"));
}

#[test]
fn test_bad_package_name_regex_is_indexed() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "platform": "github",
            "username": "renovate-release",
            "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
            "repositories": ["bitctrl/com.bitctrl"],
            "packageRules": [
                { "matchPackageNames": ["/[unclosed/"], "automerge": true }
            ]
        }"#,
    )
    .unwrap_err();

    let field_error = find_error(&error, "packageRules[0].matchPackageNames[0]");
    assert!(field_error.message.contains("invalid regular expression"));
}

/// Multiple independent problems surface in a single load attempt.
#[test]
fn test_all_errors_are_collected_in_one_pass() {
    let error = DocumentLoader::load_from_str(
        r#"{
            "branchPrefix": "bad prefix",
            "platform": "svn",
            "username": "renovate-release",
            "gitAuthor": "broken",
            "repositories": []
        }"#,
    )
    .unwrap_err();

    match &error {
        ConfigurationError::ValidationFailed { error_count, .. } => {
            assert_eq!(*error_count, 4);
        }
        other => panic!("Expected ValidationFailed, got {:?}", other),
    }

    find_error(&error, "branchPrefix");
    find_error(&error, "platform");
    find_error(&error, "gitAuthor");
    find_error(&error, "repositories");
}

// ============================================================================
// Warnings
// ============================================================================

#[test]
fn test_noop_rule_warns_but_loads() {
    let content = r#"{
        "platform": "github",
        "username": "renovate-release",
        "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
        "repositories": ["bitctrl/com.bitctrl"],
        "packageRules": [
            { "description": "placeholder" }
        ]
    }"#;

    let document = DocumentLoader::load_from_str(content).unwrap();
    assert_eq!(document.package_rules.len(), 1);

    let result = DocumentLoader::check_str(content).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].field_path, "packageRules[0]");
    assert!(result.warnings[0].message.contains("no effect"));
}

#[test]
fn test_unrecognized_option_warns_but_loads() {
    let content = r#"{
        "platform": "github",
        "username": "renovate-release",
        "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
        "repositories": ["bitctrl/com.bitctrl"],
        "schedulle": "before 5am"
    }"#;

    assert!(DocumentLoader::load_from_str(content).is_ok());

    let result = DocumentLoader::check_str(content).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].field_path, "schedulle");
}

#[test]
fn test_check_str_reports_errors_without_loading() {
    let result = DocumentLoader::check_str(r#"{ "platform": "svn" }"#).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.field_path == "platform"));
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BITCTRL_DOCUMENT.as_bytes()).unwrap();

    let document = DocumentLoader::load_from_path(file.path()).unwrap();
    assert_eq!(document.repositories[0].as_str(), "bitctrl/com.bitctrl");
}

#[test]
fn test_missing_file_is_reported() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("does-not-exist.json");

    let error = DocumentLoader::load_from_path(&path).unwrap_err();
    match error {
        ConfigurationError::FileNotFound { path: reported } => {
            assert!(reported.contains("does-not-exist.json"));
        }
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}

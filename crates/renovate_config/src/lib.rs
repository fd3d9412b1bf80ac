//! Self-hosted configuration for the Renovate dependency update bot.
//!
//! This crate owns the typed schema for the bot's configuration document,
//! eager load-time validation, and the package rule cascade that decides how
//! an individual update candidate is treated (approval gating, stability
//! aging, automerge).
//!
//! The update-checking engine, version comparison, pull request creation, and
//! scheduling live in the bot runtime that consumes this crate; the document
//! is loaded once at the start of a run and is immutable for its duration.
//!
//! # Examples
//!
//! ```rust
//! use renovate_config::{DocumentLoader, UpdateCandidate, UpdateType};
//!
//! let document = DocumentLoader::load_from_str(
//!     r#"{
//!         "platform": "github",
//!         "username": "renovate-release",
//!         "gitAuthor": "Renovate Bot <bot@renovateapp.com>",
//!         "repositories": ["bitctrl/com.bitctrl"],
//!         "packageRules": [
//!             { "matchUpdateTypes": ["patch"], "automerge": true }
//!         ]
//!     }"#,
//! )?;
//!
//! let candidate = UpdateCandidate::new("some/package", UpdateType::Patch);
//! assert!(document.resolve_rule(&candidate).automerge);
//! # Ok::<(), renovate_config::ConfigurationError>(())
//! ```

// Document schema types
pub mod branch_prefix;
pub mod identity;
pub mod platform;
pub mod repository_id;
pub mod rules;
pub mod schema;
pub mod update_type;

// Loading and validation
pub mod errors;
pub mod loader;
pub mod validation;

// Package rule cascade
pub mod resolver;


// Re-export for convenient access
pub use branch_prefix::BranchPrefix;
pub use errors::{ConfigurationError, ConfigurationResult};
pub use identity::{BotIdentity, GitAuthor};
pub use loader::DocumentLoader;
pub use platform::Platform;
pub use repository_id::RepositoryId;
pub use resolver::{ResolvedAction, UpdateCandidate};
pub use rules::{PackagePattern, PackageRule};
pub use schema::ConfigurationDocument;
pub use update_type::UpdateType;
pub use validation::{ValidationError, ValidationErrorType, ValidationResult, ValidationWarning};

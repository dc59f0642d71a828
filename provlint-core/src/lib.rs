//! provlint-core: detection engine for direct calls to DI provider methods.
//!
//! Dependency-injection "provider" methods — declarations annotated
//! `@Binds`, `@Provides`, or `@Produces` — exist for the framework's
//! generated factory code to call. A hand-written call to one bypasses
//! the framework's scoping, caching, and graph validation. This library
//! finds those calls and reports them with exact source spans, one
//! compilation unit at a time.
//!
//! The host analysis engine owns parsing, symbol resolution, and final
//! diagnostic rendering; it hands this library an already-resolved
//! semantic model per source file and receives an ordered sequence of
//! findings back.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use provlint_core::prelude::*;
//!
//! let rule = DetectionRule::dagger();
//! let findings = rule.check_unit(&unit, &ModelResolver);
//! for finding in &findings {
//!     println!("{}", finding);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`model`]: Host-populated semantic model (units, declarations, calls, spans)
//! - [`classify`]: Annotation-driven provider classification
//! - [`resolve`]: Call-target resolution contract and the model-backed resolver
//! - [`exempt`]: Generated-code exemption over the enclosing-type chain
//! - [`rule`]: The per-unit detection pass and issue metadata
//! - [`finding`]: Finding and severity types
//! - [`report`]: Reporter contract plus plain/JSON rendering
//! - [`config`]: Dagger defaults and provlint.toml loading
//! - [`error`]: Typed error handling
//!
//! # Cargo Features
//!
//! - `parallel` (default): Rayon fan-out over independent units ([`runner`])
//! - `full`: Enable all optional features

// Core modules (always available)
pub mod classify;
pub mod config;
pub mod error;
pub mod exempt;
pub mod finding;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod report;
pub mod resolve;
pub mod rule;

// Feature-gated modules
#[cfg(feature = "parallel")]
pub mod runner;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{ProvlintError, ProvlintResult};

// Semantic model
pub use model::{
    AnnotationSet, CallExpression, CallForm, CallTarget, CompilationUnit, DeclId, Declaration,
    EnclosingTypes, Modifiers, SourceSpan, TypeDecl, TypeId,
};

// Classification and exemption
pub use classify::AnnotationClassifier;
pub use exempt::ExemptionPolicy;

// Resolution contract
pub use resolve::{CallResolver, ModelResolver, Resolution};

// Detection rule
pub use rule::{DetectionRule, IssueMetadata, DO_NOT_CALL_PROVIDERS};

// Findings and reporting
pub use finding::{Finding, Severity};
pub use report::{print_json, print_plain, CollectingReporter, DiagnosticReporter};

// Configuration
pub use config::{
    load_config, AnnotationConfig, OutputConfig, ProvlintConfig, RuleConfig, RuleOverrides,
    DAGGER_PROVIDER_ANNOTATIONS, DEFAULT_MESSAGE, DEFAULT_RULE_ID, GENERATED_MARKER_ANNOTATIONS,
};

// Logging
pub use logging::init_structured_logging;

// Feature-gated re-exports
#[cfg(feature = "parallel")]
pub use runner::check_units;

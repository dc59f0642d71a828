//! Prelude module for convenient imports.
//!
//! Import the commonly used types with a single line:
//!
//! ```rust,ignore
//! use provlint_core::prelude::*;
//! ```

// Semantic model
pub use crate::model::{
    AnnotationSet, CallExpression, CallForm, CallTarget, CompilationUnit, DeclId, Declaration,
    Modifiers, SourceSpan, TypeDecl, TypeId,
};

// Detection
pub use crate::classify::AnnotationClassifier;
pub use crate::exempt::ExemptionPolicy;
pub use crate::rule::{DetectionRule, DO_NOT_CALL_PROVIDERS};

// Resolution
pub use crate::resolve::{CallResolver, ModelResolver, Resolution};

// Findings and reporting
pub use crate::finding::{Finding, Severity};
pub use crate::report::{CollectingReporter, DiagnosticReporter};

// Configuration
pub use crate::config::{load_config, ProvlintConfig, RuleConfig};

// Errors
pub use crate::error::{ProvlintError, ProvlintResult};

// Parallel fan-out
#[cfg(feature = "parallel")]
pub use crate::runner::check_units;

//! Typed error handling for provlint.
//!
//! Provides structured errors that embedding hosts can match on. Note
//! that per-call failures are never fatal to a unit pass: the rule logs
//! and skips the offending call so one bad call site cannot suppress
//! findings for the rest of the file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for provlint operations.
#[derive(Error, Debug)]
pub enum ProvlintError {
    /// The host's resolver failed while resolving a call target.
    #[error("Resolution error for call to `{callee}` in {file}: {message}")]
    Resolution {
        callee: String,
        file: String,
        message: String,
    },

    /// The semantic model is internally inconsistent (e.g. a resolver
    /// handed back a declaration handle from a different unit).
    #[error("Model error: {message}")]
    Model { message: String },

    /// Configuration file errors.
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl ProvlintError {
    /// Create a resolution error with call-site context.
    pub fn resolution(
        callee: impl Into<String>,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Resolution {
            callee: callee.into(),
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a model consistency error.
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True if analysis can continue past this error.
    ///
    /// Resolution and model errors are scoped to a single call site and
    /// are always skippable; a broken config file is not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Resolution { .. } | Self::Model { .. })
    }
}

/// Convenience type alias for provlint results.
pub type ProvlintResult<T> = Result<T, ProvlintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_message() {
        let err = ProvlintError::resolution("provider", "src/Foo.kt", "symbol table corrupted");
        assert!(err.to_string().contains("provider"));
        assert!(err.to_string().contains("src/Foo.kt"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_error_not_recoverable() {
        let err = ProvlintError::config("/repo/provlint.toml", "invalid toml");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("provlint.toml"));
    }

    #[test]
    fn test_model_error_recoverable() {
        assert!(ProvlintError::model("dangling DeclId").is_recoverable());
    }
}

//! Rule configuration, with optional loading from provlint.toml.
//!
//! The recognized annotation sets are explicit configuration, never
//! implicit global state: the defaults are the Dagger names, but a host
//! can point the same engine at any other annotation-driven provider
//! convention.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Default provider-marking annotations (fully-qualified names).
pub const DAGGER_PROVIDER_ANNOTATIONS: &[&str] = &[
    "dagger.Binds",
    "dagger.Provides",
    "dagger.producers.Produces",
];

/// Default generated-code marker annotations (fully-qualified names).
pub const GENERATED_MARKER_ANNOTATIONS: &[&str] = &["javax.annotation.Generated"];

/// Default rule identifier.
pub const DEFAULT_RULE_ID: &str = "DoNotCallProviders";

/// Default diagnostic message.
pub const DEFAULT_MESSAGE: &str =
    "Dagger provider methods should not be called directly by user code.";

/// In-memory rule configuration.
///
/// `Default` yields the Dagger convention: `dagger.Binds`,
/// `dagger.Provides`, and `dagger.producers.Produces` as provider markers
/// and `javax.annotation.Generated` as the exemption marker.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Fully-qualified annotation names that mark provider declarations.
    pub provider_annotations: Vec<String>,
    /// Fully-qualified annotation names that mark generated (exempt) types.
    pub generated_annotations: Vec<String>,
    /// Rule identifier carried on every finding.
    pub rule_id: String,
    /// Diagnostic message carried on every finding.
    pub message: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            provider_annotations: DAGGER_PROVIDER_ANNOTATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            generated_annotations: GENERATED_MARKER_ANNOTATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rule_id: DEFAULT_RULE_ID.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// Main configuration structure for provlint.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ProvlintConfig {
    /// Annotation-set overrides.
    pub annotations: Option<AnnotationConfig>,
    /// Finding metadata overrides.
    pub rule: Option<RuleOverrides>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Annotation-set overrides from provlint.toml.
#[derive(Debug, Deserialize, Default)]
pub struct AnnotationConfig {
    /// Replaces the provider-marking annotation set.
    pub providers: Option<Vec<String>>,
    /// Replaces the generated-marker annotation set.
    pub generated: Option<Vec<String>>,
}

/// Rule id / message overrides from provlint.toml.
#[derive(Debug, Deserialize, Default)]
pub struct RuleOverrides {
    /// Overrides the rule identifier.
    pub id: Option<String>,
    /// Overrides the diagnostic message.
    pub message: Option<String>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl ProvlintConfig {
    /// Resolve to a [`RuleConfig`], filling unset fields from the
    /// Dagger defaults.
    pub fn rule_config(&self) -> RuleConfig {
        let mut cfg = RuleConfig::default();
        if let Some(ann) = &self.annotations {
            if let Some(providers) = &ann.providers {
                cfg.provider_annotations = providers.clone();
            }
            if let Some(generated) = &ann.generated {
                cfg.generated_annotations = generated.clone();
            }
        }
        if let Some(rule) = &self.rule {
            if let Some(id) = &rule.id {
                cfg.rule_id = id.clone();
            }
            if let Some(message) = &rule.message {
                cfg.message = message.clone();
            }
        }
        cfg
    }
}

/// Loads configuration from provlint.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<ProvlintConfig>> {
    let path = root.join("provlint.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid provlint.toml")?;
    Ok(Some(cfg))
}

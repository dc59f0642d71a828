//! Findings: one reported rule violation with a precise location.

use crate::model::SourceSpan;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// One rule violation, anchored to the exact text span of the offending
/// call expression.
///
/// Immutable once produced; one finding per offending call expression,
/// so a single statement with two offending calls yields two findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Exact span of the call expression, receiver included.
    pub span: SourceSpan,
    /// Rule identifier (e.g. `DoNotCallProviders`).
    pub rule_id: String,
    /// Severity of the violation.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    /// Create a finding.
    pub fn new(
        span: SourceSpan,
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            span,
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
        }
    }
}

/// Findings order by their span: (file, start offset). This is the
/// ordering they are reported in.
impl Ord for Finding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.span.cmp(&other.span)
    }
}

impl PartialOrd for Finding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {} [{}]",
            self.span, self.severity, self.message, self.rule_id
        )
    }
}

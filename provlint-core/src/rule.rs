//! The detection rule: one pass over a compilation unit's call sites.
//!
//! For every call expression the host enumerated — plain, qualified, and
//! receiver/extension forms alike — the rule resolves the target, asks the
//! classifier whether it is a provider declaration, asks the exemption
//! policy whether the call sits inside generated code, and reports a
//! finding when it is a provider call in hand-written code.
//!
//! The pass holds no mutable state beyond the finding buffer for the unit
//! at hand, so one `DetectionRule` may serve concurrent unit passes.

use crate::classify::AnnotationClassifier;
use crate::config::RuleConfig;
use crate::exempt::ExemptionPolicy;
use crate::finding::{Finding, Severity};
use crate::model::CompilationUnit;
use crate::report::DiagnosticReporter;
use crate::resolve::{CallResolver, Resolution};
use tracing::{debug, warn};

/// Descriptive metadata for a rule, for hosts that render rule
/// documentation alongside findings.
#[derive(Debug, Clone, Copy)]
pub struct IssueMetadata {
    /// Stable rule identifier.
    pub id: &'static str,
    /// One-line description.
    pub brief: &'static str,
    /// Longer explanation of why the pattern is flagged.
    pub explanation: &'static str,
    /// Default severity for findings of this rule.
    pub severity: Severity,
}

/// Metadata for the direct-provider-call rule.
pub const DO_NOT_CALL_PROVIDERS: IssueMetadata = IssueMetadata {
    id: "DoNotCallProviders",
    brief: "Dagger provider methods should not be called directly by user code.",
    explanation: "Methods annotated with @Binds, @Provides, or @Produces exist for the \
                  injection framework's generated factories to call. Invoking one by hand \
                  bypasses the framework's scoping, caching, and graph validation, so the \
                  value you get back is not the value the object graph holds.",
    severity: Severity::Error,
};

/// The direct-provider-call detection rule.
#[derive(Debug, Clone)]
pub struct DetectionRule {
    classifier: AnnotationClassifier,
    exemptions: ExemptionPolicy,
    rule_id: String,
    message: String,
    severity: Severity,
}

impl DetectionRule {
    /// Build a rule from configuration.
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            classifier: AnnotationClassifier::from_config(config),
            exemptions: ExemptionPolicy,
            rule_id: config.rule_id.clone(),
            message: config.message.clone(),
            severity: DO_NOT_CALL_PROVIDERS.severity,
        }
    }

    /// Rule with the default Dagger configuration.
    pub fn dagger() -> Self {
        Self::new(&RuleConfig::default())
    }

    /// Check one compilation unit and return its findings in ascending
    /// source-position order.
    ///
    /// Never fails: a call whose resolution errors is logged and skipped,
    /// so one bad call site cannot suppress findings for the rest of the
    /// file.
    pub fn check_unit<R: CallResolver>(&self, unit: &CompilationUnit, resolver: &R) -> Vec<Finding> {
        let mut findings = Vec::new();

        for call in unit.calls() {
            let target = match resolver.resolve(unit, call) {
                Ok(Resolution::Target(id)) => id,
                Ok(Resolution::Unresolved) => {
                    debug!(file = %unit.file, callee = %call.callee, "skipping unresolved call");
                    continue;
                }
                Err(e) => {
                    warn!(file = %unit.file, callee = %call.callee, error = %e,
                          "resolver failed; skipping call");
                    continue;
                }
            };

            // The resolver vouched for the id, but stay panic-free
            // against a resolver that does not.
            let Some(decl) = unit.get_declaration(target) else {
                warn!(file = %unit.file, callee = %call.callee,
                      "resolver returned a dangling declaration handle; skipping call");
                continue;
            };

            if !self.classifier.is_provider_declaration(decl) {
                continue;
            }

            if self.exemptions.is_exempt(&self.classifier, unit, call) {
                debug!(file = %unit.file, callee = %call.callee,
                       "provider call inside generated code; suppressed");
                continue;
            }

            findings.push(Finding::new(
                call.span.clone(),
                self.rule_id.clone(),
                self.severity,
                self.message.clone(),
            ));
        }

        // Calls usually arrive in source order already; sort to guarantee
        // the reporting contract regardless of host enumeration order.
        findings.sort();
        findings
    }

    /// Check one unit and emit each finding through a reporter.
    ///
    /// Returns the number of findings emitted.
    pub fn run<R: CallResolver, D: DiagnosticReporter>(
        &self,
        unit: &CompilationUnit,
        resolver: &R,
        reporter: &mut D,
    ) -> usize {
        let findings = self.check_unit(unit, resolver);
        let count = findings.len();
        for finding in findings {
            reporter.report(finding);
        }
        count
    }

    /// Rule identifier carried on findings.
    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }
}

impl Default for DetectionRule {
    fn default() -> Self {
        Self::dagger()
    }
}

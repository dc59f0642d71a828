//! Diagnostic reporting - the reporter contract plus plain and JSON
//! rendering.
//!
//! The host owns final rendering (counts, colors, exit status); the rule
//! only hands it correct, precisely-located findings through the
//! [`DiagnosticReporter`] contract. The printers here cover hosts that
//! want the common formats without writing their own.

use crate::finding::Finding;
use serde_json::json;

/// Sink for findings, implemented by the host.
pub trait DiagnosticReporter {
    /// Emit one located finding.
    fn report(&mut self, finding: Finding);
}

/// Reporter that buffers findings in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    findings: Vec<Finding>,
}

impl CollectingReporter {
    /// An empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings collected so far, in emission order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Consume the reporter, yielding its findings.
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl DiagnosticReporter for CollectingReporter {
    fn report(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

/// Prints findings in plain lint style, one line per finding plus a
/// trailing count summary.
pub fn print_plain(findings: &[Finding]) {
    for finding in findings {
        println!("{}", finding);
    }
    match findings.len() {
        0 => println!("No provider-call violations found."),
        1 => println!("1 error"),
        n => println!("{} errors", n),
    }
}

/// Prints findings in JSON format.
///
/// Falls back to a minimal rendering if serialization fails (should never
/// happen for findings, but a rendering hiccup must not lose results).
pub fn print_json(findings: &[Finding]) {
    match serde_json::to_string_pretty(&json!({ "findings": findings })) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            for finding in findings {
                println!("{}", finding);
            }
        }
    }
}

//! Parallel fan-out over independent compilation units.
//!
//! Units share no mutable state and the rule is read-only during a pass,
//! so checking many units is embarrassingly parallel. Hosts that drive
//! their own scheduling can ignore this module and call
//! [`DetectionRule::check_unit`] per unit; hosts that want the fan-out get
//! it here with a deterministic merged ordering.

use crate::finding::Finding;
use crate::model::CompilationUnit;
use crate::resolve::CallResolver;
use crate::rule::DetectionRule;
use rayon::prelude::*;

/// Check every unit in parallel and merge findings ordered by
/// (file, start offset).
///
/// The merge sort makes output independent of worker scheduling, so runs
/// are reproducible and diffable.
pub fn check_units<R>(
    rule: &DetectionRule,
    units: &[CompilationUnit],
    resolver: &R,
) -> Vec<Finding>
where
    R: CallResolver + Sync,
{
    let mut findings: Vec<Finding> = units
        .par_iter()
        .flat_map_iter(|unit| rule.check_unit(unit, resolver))
        .collect();
    findings.sort();
    findings
}

//! Call-target resolution, abstracted behind a narrow trait.
//!
//! Symbol resolution belongs to the host's semantic engine; the rule never
//! builds its own symbol table or tracks imports. The trait exists so the
//! detection algorithm is unit-testable against a fake resolver without a
//! real parser or type checker behind it.

use crate::error::{ProvlintError, ProvlintResult};
use crate::model::{CallExpression, CallTarget, CompilationUnit, DeclId};

/// Outcome of resolving one call expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The call resolves to this declaration.
    Target(DeclId),
    /// The host could not determine a target. Valid and terminal: the
    /// call is skipped, never reported.
    Unresolved,
}

/// Adapter over the host's semantic resolution facility.
///
/// `Err` means the host's resolver itself failed (threw, returned
/// garbage); the rule logs it and skips the call, so a single bad call
/// site cannot suppress findings for the rest of the unit.
pub trait CallResolver {
    /// Resolve a call expression to its target declaration.
    fn resolve(
        &self,
        unit: &CompilationUnit,
        call: &CallExpression,
    ) -> ProvlintResult<Resolution>;
}

/// Production resolver: reads the target the host recorded in the model
/// when it built the compilation unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelResolver;

impl CallResolver for ModelResolver {
    fn resolve(
        &self,
        unit: &CompilationUnit,
        call: &CallExpression,
    ) -> ProvlintResult<Resolution> {
        match call.target {
            CallTarget::Resolved(id) => {
                if unit.get_declaration(id).is_none() {
                    return Err(ProvlintError::model(format!(
                        "call to `{}` resolved to a declaration outside unit {}",
                        call.callee, unit.file
                    )));
                }
                Ok(Resolution::Target(id))
            }
            CallTarget::Unresolved => Ok(Resolution::Unresolved),
        }
    }
}

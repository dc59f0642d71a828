//! Call expressions: the syntactic call sites the rule inspects.
//!
//! All three surface forms the analyzed languages offer — a plain call
//! `f()`, a qualified call `Holder.f()`, and a receiver/extension call
//! `"x".f()` — collapse into one record with an optional receiver.
//! Detection dispatches on the resolved target's classification, never on
//! the call's surface syntax.

use crate::model::decl::{DeclId, TypeId};
use crate::model::span::SourceSpan;
use serde::{Deserialize, Serialize};

/// Surface syntax of a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallForm {
    /// `f()` — no receiver written.
    Plain,
    /// `Holder.f()` — qualified by a type or object name.
    Qualified,
    /// `"x".f()` — member or extension call on a receiver expression.
    Receiver,
}

/// Outcome of the host's resolution for a call site, recorded in the model.
///
/// `Unresolved` is a valid terminal state, not an error: the host could
/// not determine a target (missing classpath entry, in-progress edit) and
/// the call is skipped rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallTarget {
    /// Resolution succeeded; the callee is this declaration.
    Resolved(DeclId),
    /// The host could not resolve the callee.
    Unresolved,
}

/// One syntactic call site within a compilation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallExpression {
    /// Callee name as written at the call site.
    pub callee: String,
    /// Surface form of the call.
    pub form: CallForm,
    /// Receiver text, for qualified and receiver-form calls.
    pub receiver: Option<String>,
    /// The declaration the host resolved this call to, if any.
    pub target: CallTarget,
    /// Exact text span of the whole call expression, receiver included.
    pub span: SourceSpan,
    /// Innermost type lexically containing the call site, if any.
    pub enclosing_type: Option<TypeId>,
}

impl CallExpression {
    /// A plain call `f()`.
    pub fn plain(callee: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            callee: callee.into(),
            form: CallForm::Plain,
            receiver: None,
            target: CallTarget::Unresolved,
            span,
            enclosing_type: None,
        }
    }

    /// A qualified call `receiver.f()` where the receiver is a type or
    /// object name.
    pub fn qualified(
        receiver: impl Into<String>,
        callee: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            callee: callee.into(),
            form: CallForm::Qualified,
            receiver: Some(receiver.into()),
            target: CallTarget::Unresolved,
            span,
            enclosing_type: None,
        }
    }

    /// A member or extension call `expr.f()` on a receiver expression.
    pub fn on_receiver(
        receiver: impl Into<String>,
        callee: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            callee: callee.into(),
            form: CallForm::Receiver,
            receiver: Some(receiver.into()),
            target: CallTarget::Unresolved,
            span,
            enclosing_type: None,
        }
    }

    /// Record the declaration the host resolved this call to.
    pub fn resolved_to(mut self, target: DeclId) -> Self {
        self.target = CallTarget::Resolved(target);
        self
    }

    /// Place the call site inside a type.
    pub fn in_type(mut self, ty: TypeId) -> Self {
        self.enclosing_type = Some(ty);
        self
    }
}

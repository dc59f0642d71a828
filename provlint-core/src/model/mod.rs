//! Semantic model shared between the host and the detection rule.
//!
//! The host's analysis engine owns parsing and symbol resolution; what the
//! rule sees is this already-resolved model: declarations with their
//! annotation sets and modifiers, the types that lexically contain them,
//! and every call expression with its exact source span and (optionally)
//! resolved target.

mod annotations;
mod call;
mod decl;
mod span;
mod unit;

pub use annotations::AnnotationSet;
pub use call::{CallExpression, CallForm, CallTarget};
pub use decl::{DeclId, Declaration, Modifiers, TypeDecl, TypeId};
pub use span::SourceSpan;
pub use unit::{CompilationUnit, EnclosingTypes};

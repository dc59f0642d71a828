//! Declarations and types of the host's semantic model.
//!
//! These records mirror what the host's resolver knows about the analyzed
//! program: a declaration's qualified name, its annotations, its modifiers
//! and the type that lexically contains it. They are populated once per
//! compilation unit and never mutated during a rule pass.

use crate::model::annotations::AnnotationSet;
use serde::{Deserialize, Serialize};

/// Handle to a [`TypeDecl`] within one compilation unit's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub(crate) usize);

/// Handle to a [`Declaration`] within one compilation unit's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclId(pub(crate) usize);

/// A class, interface, object, or companion in the analyzed program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Fully-qualified type name (e.g. `foo.MyModule`).
    pub qualified_name: String,
    /// Annotations attached to the type itself.
    pub annotations: AnnotationSet,
    /// Lexically enclosing type, if this is a nested type.
    pub parent: Option<TypeId>,
}

impl TypeDecl {
    /// A top-level type with no annotations.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: AnnotationSet::new(),
            parent: None,
        }
    }

    /// Attach an annotation by fully-qualified name.
    pub fn with_annotation(mut self, qualified_name: impl Into<String>) -> Self {
        self.annotations.insert(qualified_name);
        self
    }

    /// Attach an annotation carrying raw argument text.
    pub fn with_annotation_args(
        mut self,
        qualified_name: impl Into<String>,
        args: impl Into<String>,
    ) -> Self {
        self.annotations.insert_with_args(qualified_name, args);
        self
    }

    /// Mark this type as nested inside `parent`.
    pub fn nested_in(mut self, parent: TypeId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Modifier flags on a declaration.
///
/// Detection ignores all of these: a provider is a provider whether it is
/// abstract (interface-like binding methods), companion-scoped, or an
/// extension function. They are carried so hosts and reporters can render
/// richer context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Declared without a body (abstract method / interface member).
    pub is_abstract: bool,
    /// Static or companion-object-scoped.
    pub is_static: bool,
    /// Receiver type, when the declaration is an extension function
    /// (e.g. `fun String.binds2()` carries `Some("kotlin.String")`).
    pub extension_receiver: Option<String>,
}

/// A named function or method in the analyzed program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    /// Fully-qualified name (e.g. `foo.MyModule.provider`).
    pub qualified_name: String,
    /// Annotations attached to the declaration.
    pub annotations: AnnotationSet,
    /// Type lexically containing the declaration, if any.
    pub enclosing_type: Option<TypeId>,
    /// Modifier flags.
    pub modifiers: Modifiers,
}

impl Declaration {
    /// A top-level declaration with no annotations or modifiers.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: AnnotationSet::new(),
            enclosing_type: None,
            modifiers: Modifiers::default(),
        }
    }

    /// Place the declaration inside a type.
    pub fn in_type(mut self, ty: TypeId) -> Self {
        self.enclosing_type = Some(ty);
        self
    }

    /// Attach an annotation by fully-qualified name.
    pub fn with_annotation(mut self, qualified_name: impl Into<String>) -> Self {
        self.annotations.insert(qualified_name);
        self
    }

    /// Mark as abstract (declared without a body).
    pub fn abstract_(mut self) -> Self {
        self.modifiers.is_abstract = true;
        self
    }

    /// Mark as static / companion-object-scoped.
    pub fn static_(mut self) -> Self {
        self.modifiers.is_static = true;
        self
    }

    /// Mark as an extension function on `receiver` (fully-qualified type).
    pub fn extension_on(mut self, receiver: impl Into<String>) -> Self {
        self.modifiers.extension_receiver = Some(receiver.into());
        self
    }

    /// Simple (unqualified) name: the segment after the last `.`.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

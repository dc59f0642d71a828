//! Compilation units: one source file's worth of semantic model.
//!
//! A unit is an arena of types, declarations, and call expressions, built
//! once by the host (or a test fixture) and read-only during a rule pass.
//! Units are fully independent of each other — no shared or cross-unit
//! state — so the host may check many units in parallel.

use crate::model::call::CallExpression;
use crate::model::decl::{DeclId, Declaration, TypeDecl, TypeId};

/// The semantic model of one source file.
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    /// Source file path this unit was built from.
    pub file: String,
    types: Vec<TypeDecl>,
    decls: Vec<Declaration>,
    calls: Vec<CallExpression>,
}

impl CompilationUnit {
    /// An empty unit for the given source file.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Add a type and return its handle.
    pub fn add_type(&mut self, ty: TypeDecl) -> TypeId {
        self.types.push(ty);
        TypeId(self.types.len() - 1)
    }

    /// Add a declaration and return its handle.
    pub fn add_declaration(&mut self, decl: Declaration) -> DeclId {
        self.decls.push(decl);
        DeclId(self.decls.len() - 1)
    }

    /// Add a call expression.
    pub fn add_call(&mut self, call: CallExpression) {
        self.calls.push(call);
    }

    /// All call expressions in the unit, in insertion order.
    pub fn calls(&self) -> &[CallExpression] {
        &self.calls
    }

    /// Look up a type by handle.
    pub fn get_type(&self, id: TypeId) -> Option<&TypeDecl> {
        self.types.get(id.0)
    }

    /// Look up a declaration by handle.
    ///
    /// Returns `None` for a handle that does not belong to this unit, so
    /// a buggy resolver cannot panic the pass.
    pub fn get_declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.0)
    }

    /// Number of types in the unit.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of declarations in the unit.
    pub fn declaration_count(&self) -> usize {
        self.decls.len()
    }

    /// Walk the enclosing-type chain of a call site, innermost first,
    /// out to the compilation unit root.
    ///
    /// Traversal is capped at the arena size: a malformed parent chain
    /// containing a cycle terminates instead of looping.
    pub fn enclosing_types<'a>(&'a self, call: &CallExpression) -> EnclosingTypes<'a> {
        EnclosingTypes {
            unit: self,
            next: call.enclosing_type,
            remaining: self.types.len(),
        }
    }
}

/// Iterator over a call site's enclosing types, innermost to outermost.
pub struct EnclosingTypes<'a> {
    unit: &'a CompilationUnit,
    next: Option<TypeId>,
    remaining: usize,
}

impl<'a> Iterator for EnclosingTypes<'a> {
    type Item = &'a TypeDecl;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let ty = self.unit.get_type(self.next?)?;
        self.next = ty.parent;
        Some(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::span::SourceSpan;

    fn span() -> SourceSpan {
        SourceSpan::on_line("test.kt", 1, 1, 0, 3)
    }

    #[test]
    fn test_enclosing_chain_innermost_first() {
        let mut unit = CompilationUnit::new("test.kt");
        let outer = unit.add_type(TypeDecl::new("foo.Holder"));
        let inner = unit.add_type(TypeDecl::new("foo.Holder.MyModule").nested_in(outer));

        let call = CallExpression::plain("f", span()).in_type(inner);
        let chain: Vec<_> = unit
            .enclosing_types(&call)
            .map(|t| t.qualified_name.as_str())
            .collect();

        assert_eq!(chain, vec!["foo.Holder.MyModule", "foo.Holder"]);
    }

    #[test]
    fn test_top_level_call_has_empty_chain() {
        let unit = CompilationUnit::new("test.kt");
        let call = CallExpression::plain("f", span());
        assert_eq!(unit.enclosing_types(&call).count(), 0);
    }

    #[test]
    fn test_cyclic_parent_chain_terminates() {
        let mut unit = CompilationUnit::new("test.kt");
        let a = unit.add_type(TypeDecl::new("A"));
        let b = unit.add_type(TypeDecl::new("B").nested_in(a));
        // Introduce a cycle: A's parent is B.
        if let Some(ty) = unit.types.get_mut(a.0) {
            ty.parent = Some(b);
        }

        let call = CallExpression::plain("f", span()).in_type(b);
        // Capped at the arena size (2), not infinite.
        assert_eq!(unit.enclosing_types(&call).count(), 2);
    }

    #[test]
    fn test_dangling_declaration_handle() {
        let unit = CompilationUnit::new("test.kt");
        assert!(unit.get_declaration(DeclId(7)).is_none());
    }
}

//! Exemption policy for framework-generated code.
//!
//! Generated injection code is the one legitimate caller of provider
//! methods, so calls inside it are suppressed. Code generators annotate
//! only the outermost wrapper type they emit, but a call may sit in a
//! declaration nested arbitrarily deep inside it — the test therefore
//! climbs the full enclosing-type chain, innermost to outermost, and
//! exempts on the first marked type it meets.

use crate::classify::AnnotationClassifier;
use crate::model::{CallExpression, CompilationUnit};

/// Per-call-site exemption decision.
///
/// Separate from provider classification because the two run at different
/// granularities: a declaration is classified once, but the same provider
/// may be legitimately called from generated code and illegitimately from
/// hand-written code within one compilation unit, so exemption is tested
/// per call site.
#[derive(Debug, Clone)]
pub struct ExemptionPolicy;

impl ExemptionPolicy {
    /// True iff any type lexically enclosing the call carries a
    /// recognized generated-code marker.
    pub fn is_exempt(
        &self,
        classifier: &AnnotationClassifier,
        unit: &CompilationUnit,
        call: &CallExpression,
    ) -> bool {
        unit.enclosing_types(call)
            .any(|ty| classifier.is_generated_type(ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CallExpression, CompilationUnit, SourceSpan, TypeDecl};

    fn span() -> SourceSpan {
        SourceSpan::on_line("test.kt", 5, 3, 60, 10)
    }

    #[test]
    fn test_immediate_generated_type_exempts() {
        let mut unit = CompilationUnit::new("test.kt");
        let generated = unit.add_type(
            TypeDecl::new("foo.GeneratedCode").with_annotation("javax.annotation.Generated"),
        );
        let call = CallExpression::plain("provider", span()).in_type(generated);

        let classifier = AnnotationClassifier::dagger();
        assert!(ExemptionPolicy.is_exempt(&classifier, &unit, &call));
    }

    #[test]
    fn test_outer_generated_type_exempts_nested_call() {
        // Generator marks only the outermost wrapper; the call sits in an
        // unmarked inner type.
        let mut unit = CompilationUnit::new("test.kt");
        let outer = unit.add_type(
            TypeDecl::new("foo.Generated_Wrapper").with_annotation("javax.annotation.Generated"),
        );
        let inner = unit.add_type(TypeDecl::new("foo.Generated_Wrapper.Inner").nested_in(outer));
        let call = CallExpression::plain("provider", span()).in_type(inner);

        let classifier = AnnotationClassifier::dagger();
        assert!(ExemptionPolicy.is_exempt(&classifier, &unit, &call));
    }

    #[test]
    fn test_unmarked_chain_is_not_exempt() {
        let mut unit = CompilationUnit::new("test.kt");
        let outer = unit.add_type(TypeDecl::new("foo.Holder"));
        let inner = unit.add_type(
            TypeDecl::new("foo.Holder.MyModule")
                .with_annotation("dagger.Module")
                .nested_in(outer),
        );
        let call = CallExpression::plain("provider", span()).in_type(inner);

        let classifier = AnnotationClassifier::dagger();
        assert!(!ExemptionPolicy.is_exempt(&classifier, &unit, &call));
    }

    #[test]
    fn test_top_level_call_is_not_exempt() {
        let unit = CompilationUnit::new("test.kt");
        let call = CallExpression::plain("provider", span());
        let classifier = AnnotationClassifier::dagger();
        assert!(!ExemptionPolicy.is_exempt(&classifier, &unit, &call));
    }
}

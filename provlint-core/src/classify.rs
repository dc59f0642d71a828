//! Provider classification over declaration metadata.
//!
//! Classification is annotation-driven only: a declaration is a provider
//! iff it carries one of the recognized provider-marking annotations.
//! Names, signatures, and modifiers are never consulted, so an abstract
//! `@Binds` binding method and a concrete `@Provides` factory method are
//! classified identically, and a method that merely *looks* like a
//! provider is not one.

use crate::config::RuleConfig;
use crate::model::{Declaration, TypeDecl};
use std::collections::BTreeSet;

/// Decides provider-ness and generated-ness from annotation sets.
///
/// Pure: holds only the configured qualified-name sets, no per-unit
/// state, so one classifier may serve concurrent unit passes.
#[derive(Debug, Clone)]
pub struct AnnotationClassifier {
    providers: BTreeSet<String>,
    generated: BTreeSet<String>,
}

impl AnnotationClassifier {
    /// Build a classifier from explicit annotation-name sets.
    pub fn new(
        provider_annotations: impl IntoIterator<Item = impl Into<String>>,
        generated_annotations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            providers: provider_annotations.into_iter().map(Into::into).collect(),
            generated: generated_annotations.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a classifier from a [`RuleConfig`].
    pub fn from_config(config: &RuleConfig) -> Self {
        Self::new(
            config.provider_annotations.iter().map(String::as_str),
            config.generated_annotations.iter().map(String::as_str),
        )
    }

    /// Classifier for the Dagger convention.
    pub fn dagger() -> Self {
        Self::from_config(&RuleConfig::default())
    }

    /// True iff the declaration carries any recognized provider-marking
    /// annotation, abstract or not.
    pub fn is_provider_declaration(&self, decl: &Declaration) -> bool {
        decl.annotations
            .contains_any(self.providers.iter().map(String::as_str))
    }

    /// True iff the type carries a recognized generated-code marker.
    pub fn is_generated_type(&self, ty: &TypeDecl) -> bool {
        ty.annotations
            .contains_any(self.generated.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Declaration;

    #[test]
    fn test_all_three_provider_annotations_classify() {
        let classifier = AnnotationClassifier::dagger();
        for annotation in ["dagger.Binds", "dagger.Provides", "dagger.producers.Produces"] {
            let decl = Declaration::new("foo.M.m").with_annotation(annotation);
            assert!(
                classifier.is_provider_declaration(&decl),
                "{annotation} should mark a provider"
            );
        }
    }

    #[test]
    fn test_provider_like_name_without_annotation_is_not_provider() {
        let classifier = AnnotationClassifier::dagger();
        let decl = Declaration::new("foo.M.provideThing");
        assert!(!classifier.is_provider_declaration(&decl));
    }

    #[test]
    fn test_abstract_and_concrete_classified_identically() {
        let classifier = AnnotationClassifier::dagger();
        let abstract_binds = Declaration::new("foo.M.binds1")
            .with_annotation("dagger.Binds")
            .abstract_();
        let concrete_provides = Declaration::new("foo.M.provider")
            .with_annotation("dagger.Provides")
            .static_();
        assert!(classifier.is_provider_declaration(&abstract_binds));
        assert!(classifier.is_provider_declaration(&concrete_provides));
    }

    #[test]
    fn test_simple_name_collision_rejected() {
        let classifier = AnnotationClassifier::dagger();
        let decl = Declaration::new("foo.M.m").with_annotation("com.other.Provides");
        assert!(!classifier.is_provider_declaration(&decl));
    }

    #[test]
    fn test_generated_type_marker() {
        let classifier = AnnotationClassifier::dagger();
        let generated = TypeDecl::new("foo.GeneratedCode")
            .with_annotation_args("javax.annotation.Generated", "\"tool\"");
        let plain = TypeDecl::new("foo.MyModule").with_annotation("dagger.Module");
        assert!(classifier.is_generated_type(&generated));
        assert!(!classifier.is_generated_type(&plain));
    }

    #[test]
    fn test_custom_annotation_set() {
        let classifier =
            AnnotationClassifier::new(["com.example.Supplies"], ["com.example.Machine"]);
        let decl = Declaration::new("a.B.c").with_annotation("com.example.Supplies");
        assert!(classifier.is_provider_declaration(&decl));
        // The Dagger names are not baked in.
        let dagger = Declaration::new("a.B.d").with_annotation("dagger.Provides");
        assert!(!classifier.is_provider_declaration(&dagger));
    }
}

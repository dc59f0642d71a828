//! Annotation sets attached to declarations and types.
//!
//! Membership is by exact fully-qualified name (`dagger.Provides`, not
//! `Provides`): same-named annotations from unrelated packages must not
//! collide. Annotation arguments are stored as the raw source text the
//! host saw, but classification never reads them — presence is the only
//! signal, so malformed or partial argument lists cannot break detection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The annotations attached to one declaration or type.
///
/// Keys are fully-qualified annotation names; values are the raw argument
/// text, if the annotation had any (`@Generated("by dagger")` stores
/// `Some("\"by dagger\"")`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSet {
    entries: BTreeMap<String, Option<String>>,
}

impl AnnotationSet {
    /// An empty annotation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an annotation by fully-qualified name, without arguments.
    pub fn insert(&mut self, qualified_name: impl Into<String>) {
        self.entries.insert(qualified_name.into(), None);
    }

    /// Add an annotation with its raw argument text.
    pub fn insert_with_args(
        &mut self,
        qualified_name: impl Into<String>,
        args: impl Into<String>,
    ) {
        self.entries.insert(qualified_name.into(), Some(args.into()));
    }

    /// Exact-name membership test.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.entries.contains_key(qualified_name)
    }

    /// True if any of `qualified_names` is present.
    pub fn contains_any<'a>(&self, qualified_names: impl IntoIterator<Item = &'a str>) -> bool {
        qualified_names.into_iter().any(|n| self.contains(n))
    }

    /// Raw argument text of an annotation, if present and it had any.
    pub fn args(&self, qualified_name: &str) -> Option<&str> {
        self.entries.get(qualified_name)?.as_deref()
    }

    /// Iterate over annotation names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of annotations in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no annotations are attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_match() {
        let set: AnnotationSet = ["dagger.Provides"].into_iter().collect();
        assert!(set.contains("dagger.Provides"));
        // Simple name or a different package must not match.
        assert!(!set.contains("Provides"));
        assert!(!set.contains("com.other.Provides"));
    }

    #[test]
    fn test_contains_any() {
        let set: AnnotationSet = ["dagger.Binds", "dagger.Module"].into_iter().collect();
        assert!(set.contains_any(["dagger.Provides", "dagger.Binds"]));
        assert!(!set.contains_any(["dagger.Provides", "dagger.producers.Produces"]));
        let no_names: [&str; 0] = [];
        assert!(!set.contains_any(no_names));
    }

    #[test]
    fn test_args_stored_but_optional() {
        let mut set = AnnotationSet::new();
        set.insert_with_args("javax.annotation.Generated", "\"Totes generated code\"");
        set.insert("dagger.Module");

        assert_eq!(
            set.args("javax.annotation.Generated"),
            Some("\"Totes generated code\"")
        );
        assert_eq!(set.args("dagger.Module"), None);
        assert_eq!(set.args("absent.Annotation"), None);
    }

    #[test]
    fn test_names_sorted() {
        let set: AnnotationSet = ["z.Last", "a.First"].into_iter().collect();
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["a.First", "z.Last"]);
    }
}

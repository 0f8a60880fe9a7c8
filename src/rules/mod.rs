//! Static detection registries.
//!
//! Each registry is an ordered, immutable list of [`Rule`]s compiled once
//! at first use. Order matters only for output determinism (ties broken by
//! registry order), never for correctness.

pub mod dependency;
pub mod injection;
pub mod pii;
pub mod secrets;
pub mod types;

pub use types::{truncate_snippet, Category, Issue, Persona, Rule, Severity};

/// Compile a registry pattern. Registry regexes are static data; a failure
/// to compile is a programming error, caught by the registry tests.
pub(crate) fn compile(pattern: &str) -> regex::Regex {
    regex::Regex::new(pattern).unwrap_or_else(|e| panic!("invalid rule pattern {pattern:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    #[test]
    fn test_all_registries_compile() {
        assert!(!super::secrets::rules().is_empty());
        assert!(!super::dependency::rules().is_empty());
        assert!(!super::pii::rules().is_empty());
        assert!(!super::injection::rules().is_empty());
    }

    #[test]
    fn test_rule_names_unique_within_registry() {
        for rules in [
            super::secrets::rules(),
            super::dependency::rules(),
            super::pii::rules(),
            super::injection::rules(),
        ] {
            let names: HashSet<_> = rules.iter().map(|r| r.name).collect();
            assert_eq!(names.len(), rules.len(), "duplicate rule name in registry");
        }
    }

    #[test]
    fn test_registry_categories_are_homogeneous() {
        use super::types::Category;
        assert!(super::secrets::rules()
            .iter()
            .all(|r| r.category == Category::Secrets));
        assert!(super::dependency::rules()
            .iter()
            .all(|r| r.category == Category::Dependencies));
        assert!(super::pii::rules()
            .iter()
            .all(|r| r.category == Category::Pii));
        assert!(super::injection::rules()
            .iter()
            .all(|r| r.category == Category::PromptInjection));
    }
}

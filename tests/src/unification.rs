//! Pattern unification and the combinator templates built on it.

use rebranch_category::{Category, Pattern, Unification};
use rebranch_derivation::Rule;
use rebranch_rewrite::combinator::{combine, unify_rule};

fn cat(text: &str) -> Category {
    Category::parse(text).unwrap()
}

mod patterns {
    use super::*;

    #[test]
    fn test_forward_application_binds_both_sides() {
        let unifier = Unification::new("a/b", "b").unwrap();
        let bindings = unifier.unify(&cat(r"S/(S\NP)"), &cat(r"S\NP")).unwrap();
        assert_eq!(bindings.get("a"), Some(&cat("S")));
        assert_eq!(bindings.get("b"), Some(&cat(r"S\NP")));
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_exact_slash_must_match() {
        let unifier = Unification::new("a/b", "b").unwrap();
        assert!(unifier.unify(&cat(r"S\NP"), &cat("NP")).is_none());
    }

    #[test]
    fn test_functor_pattern_does_not_match_atom() {
        let unifier = Unification::new("a/b", "b").unwrap();
        assert!(unifier.unify(&cat("NP"), &cat("NP")).is_none());
    }

    #[test]
    fn test_first_binding_keeps_its_features() {
        let unifier = Unification::new("b", r"a\b").unwrap();
        let bindings = unifier
            .unify(&cat("NP[case=ga]"), &cat(r"S\NP[case=o]"))
            .unwrap();
        assert_eq!(bindings.get("b"), Some(&cat("NP[case=ga]")));
    }

    #[test]
    fn test_substitute_builds_result() {
        let unifier = Unification::new("a/b", "b/c").unwrap();
        let bindings = unifier.unify(&cat("S/S"), &cat(r"S/NP")).unwrap();
        let result = bindings.substitute(&Pattern::parse("a/c").unwrap());
        assert_eq!(result, Some(cat("S/NP")));
    }

    #[test]
    fn test_variables_cannot_carry_features() {
        assert!(Pattern::parse("a[case=ga]/b").is_err());
    }
}

mod combinators {
    use super::*;

    #[test]
    fn test_application() {
        assert_eq!(
            combine(Rule::ForwardApplication, &cat(r"(S\NP)/NP"), &cat("NP")),
            Some(cat(r"S\NP"))
        );
        assert_eq!(
            combine(Rule::BackwardApplication, &cat("NP"), &cat(r"S\NP")),
            Some(cat("S"))
        );
        assert_eq!(
            combine(Rule::ForwardApplication, &cat("NP"), &cat("NP")),
            None
        );
    }

    #[test]
    fn test_forward_composition_degrees() {
        assert_eq!(
            combine(Rule::ForwardComposition, &cat(r"S/(S\NP)"), &cat(r"(S\NP)/NP")),
            Some(cat("S/NP"))
        );
        assert_eq!(
            combine(
                Rule::ForwardComposition2,
                &cat("S/S"),
                &cat(r"(S/NP)/NP")
            ),
            Some(cat("(S/NP)/NP"))
        );
    }

    #[test]
    fn test_crossed_composition_keeps_backward_argument() {
        assert_eq!(
            combine(Rule::ForwardCrossedComposition1, &cat("S/S"), &cat(r"S\NP")),
            Some(cat(r"S\NP"))
        );
    }

    #[test]
    fn test_backward_composition() {
        assert_eq!(
            combine(Rule::BackwardComposition1, &cat(r"S\NP"), &cat(r"S\S")),
            Some(cat(r"S\NP"))
        );
        assert_eq!(
            combine(
                Rule::BackwardComposition2,
                &cat(r"(S\NP)\NP"),
                &cat(r"S\S")
            ),
            Some(cat(r"(S\NP)\NP"))
        );
    }

    #[test]
    fn test_non_combinatory_rules_have_no_template() {
        assert!(unify_rule(Rule::Conjunction, &cat("S"), &cat("S")).is_none());
        assert!(unify_rule(Rule::TypeRaise, &cat("NP"), &cat(r"S\NP")).is_none());
    }
}

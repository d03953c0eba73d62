//! Category parsing, printing and structural queries.

use rebranch_category::{Category, CategoryError, Features, Slash};

fn cat(text: &str) -> Category {
    Category::parse(text).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_display_round_trips_corpus_categories() {
        for text in [
            "NP",
            r"S\NP",
            r"(S\NP)\NP",
            r"S/(S\NP)",
            r"((S\NP)\NP)/((S\NP)\NP)",
            "NP[case=ga,mod=nm,fin=f]",
            r"(S[mod=nm,form=base,fin=t]\NP[case=ga,mod=nm,fin=f])\NP[case=o,mod=nm,fin=f]",
        ] {
            assert_eq!(cat(text).to_string(), text);
        }
    }

    #[test]
    fn test_redundant_parentheses_are_dropped() {
        assert_eq!(cat(r"((S)\(NP))").to_string(), r"S\NP");
    }

    #[test]
    fn test_whitespace_around_slashes_is_ignored() {
        assert_eq!(cat(r"S \ NP"), cat(r"S\NP"));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Category = r"S/(S\NP)".parse().unwrap();
        assert_eq!(parsed, cat(r"S/(S\NP)"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(Category::parse("").is_err());
    }

    #[test]
    fn test_dangling_slash_is_rejected() {
        assert!(matches!(
            Category::parse("S/"),
            Err(CategoryError::UnexpectedEnd { offset: 2 })
        ));
    }

    #[test]
    fn test_wildcard_slash_is_pattern_only() {
        assert_eq!(
            Category::parse(r"S|NP"),
            Err(CategoryError::WildcardInCategory { offset: 1 })
        );
    }
}

mod features {
    use super::*;

    #[test]
    fn test_feature_order_does_not_affect_equality() {
        assert_eq!(cat("NP[case=ga,mod=nm]"), cat("NP[mod=nm,case=ga]"));
        assert_ne!(cat("NP[case=ga]"), cat("NP[case=o]"));
    }

    #[test]
    fn test_features_are_ignored_structurally() {
        let left = cat(r"S[mod=nm]\NP[case=ga]");
        let right = cat(r"S\NP");
        assert_ne!(left, right);
        assert!(left.structurally_eq(&right));
        assert_eq!(left.strip_features(), right);
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut features = Features::new();
        features.insert("case", "ga");
        features.insert("case", "o");
        assert_eq!(features.len(), 1);
        assert_eq!(features.get("case"), Some("o"));
    }
}

mod structure {
    use super::*;

    #[test]
    fn test_accessors() {
        let raised = cat(r"S/(S\NP)");
        assert!(raised.is_functor());
        assert_eq!(raised.slash(), Some(Slash::Forward));
        assert_eq!(raised.left(), Some(&cat("S")));
        assert_eq!(raised.right(), Some(&cat(r"S\NP")));
        assert_eq!(cat("NP").base(), Some("NP"));
        assert_eq!(raised.base(), None);
    }

    #[test]
    fn test_modifiers() {
        assert!(cat("S/S").is_forward_modifier());
        assert!(cat(r"S\S").is_post_modifier());
        assert!(cat(r"(S\NP)/(S\NP)").is_modifier());
        assert!(!cat(r"S/NP").is_modifier());
        assert_eq!(cat(r"(S\NP)\(S\NP)").modified(), Some(&cat(r"S\NP")));
    }

    #[test]
    fn test_verb_phrases() {
        assert!(cat(r"S\NP").is_verb_phrase());
        assert!(cat(r"((S\NP)\NP)\NP").is_verb_phrase());
        assert!(!cat("S").is_verb_phrase());
        assert!(!cat(r"S\S").is_verb_phrase());
        assert!(!cat(r"NP\NP").is_verb_phrase());
    }

    #[test]
    fn test_arity_and_result() {
        let verb = cat(r"((S\NP)\NP)\NP");
        assert_eq!(verb.arity(), 3);
        assert_eq!(verb.result(), &cat("S"));
        assert_eq!(verb.count_atoms("NP"), 3);
    }
}

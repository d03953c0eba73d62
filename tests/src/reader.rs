//! Reading corpus files and rendering derivations.

use rebranch::{DerivationError, Rule, Token, parse_derivation, printer, read_derivations};

use crate::utils::{read_corpus, tree};

mod reading {
    use super::*;

    #[test]
    fn test_ids_come_from_preceding_lines() {
        let sentences = read_corpus("scenarios.ccgbank");
        let ids: Vec<_> = sentences.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["ID=1", "ID=2", "ID=3"]);
    }

    #[test]
    fn test_inline_and_numbered_ids() {
        let input = "a {NP x}\n{NP y}\n";
        let ids: Vec<_> = read_derivations(input)
            .into_iter()
            .map(|result| result.unwrap().id)
            .collect();
        assert_eq!(ids, ["a", "2"]);
    }

    #[test]
    fn test_full_tokens() {
        let sentences = read_corpus("ja.ccgbank");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].id, "ID=1, log probability=-0.5");
        let tokens = sentences[0].tree.tokens();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].surface, "太郎が");
        assert_eq!(tokens[2].pos, "動詞");
        assert_eq!(tokens[2].inflection, "基本形");
    }

    #[test]
    fn test_structure() {
        let t = tree(r"{> S {S/S Today} {ADV0 S {S rain}}}");
        assert!(t.is_binary());
        assert_eq!(t.rule(), Some(Rule::ForwardApplication));
        assert_eq!(t.words(), ["Today", "rain"]);
        assert_eq!(t.node_count(), 4);
        assert_eq!(t.depth(), 2);
        assert!(t.children()[1].is_unary());
    }

    #[test]
    fn test_bare_token_defaults() {
        let token = Token::parse("走る");
        assert_eq!(token, Token::new("走る"));
        assert_eq!(token.base, "走る");
        assert_eq!(token.pos, "_");
    }

    #[test]
    fn test_unknown_rule_symbol() {
        assert!(matches!(
            parse_derivation(r"{>Q S {S/S a} {S b}}"),
            Err(DerivationError::UnknownRule { offset: 1, .. })
        ));
    }

    #[test]
    fn test_child_count_must_match_rule() {
        assert!(matches!(
            parse_derivation(r"{> S {NP a}}"),
            Err(DerivationError::ChildCount {
                rule: Rule::ForwardApplication,
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_category() {
        assert!(matches!(
            parse_derivation(r"{< S {NP a} {S\ b}}"),
            Err(DerivationError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_trailing_input() {
        assert!(matches!(
            parse_derivation(r"{NP a} {NP b}"),
            Err(DerivationError::TrailingInput { .. })
        ));
    }

    #[test]
    fn test_bad_line_does_not_stop_the_file() {
        let input = "{NP a}\n{> S {NP b}\n{NP c}\n";
        let results = read_derivations(input);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(DerivationError::AtLine { line: 2, .. })
        ));
        assert!(results[2].is_ok());
    }
}

mod printing {
    use super::*;

    #[test]
    fn test_ja_of_reproduces_corpus_lines() {
        let text = std::fs::read_to_string(
            crate::utils::get_test_data_path().join("ja.ccgbank"),
        )
        .unwrap();
        let line = text.lines().nth(1).unwrap();
        assert_eq!(printer::ja_of(&tree(line)), line);
    }

    #[test]
    fn test_auto_of_marks_heads() {
        let t = tree(r"{> S {S/S a} {ADV0 S {S b}}}");
        assert_eq!(
            printer::auto_of(&t),
            "(<T S 0 2> (<L S/S _ _ a S/S>) (<T S 0 1> (<L S _ _ b S>) ) )"
        );
    }

    #[test]
    fn test_deriv_of_indents_by_depth() {
        let t = tree(r"{< S {NP a} {> S\NP {(S\NP)/NP b} {NP c}}}");
        assert_eq!(
            printer::deriv_of(&t),
            "a b c\n  >: (S\\NP)/NP NP => S\\NP\n<: NP S\\NP => S\n"
        );
    }
}

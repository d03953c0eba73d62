//! The closed set of rule symbols.

use rebranch_derivation::{Direction, Rule};

#[test]
fn test_every_symbol_parses_back() {
    for rule in Rule::ALL {
        assert_eq!(rule.symbol().parse::<Rule>().unwrap(), *rule);
        assert_eq!(rule.to_string(), rule.symbol());
    }
}

#[test]
fn test_unknown_symbol_is_rejected() {
    let err = "<Bx1".parse::<Rule>().unwrap_err();
    assert_eq!(err.to_string(), "unknown rule symbol `<Bx1`");
}

#[test]
fn test_directions() {
    assert_eq!(Rule::ForwardCrossedComposition2.direction(), Some(Direction::Forward));
    assert_eq!(Rule::BackwardComposition3.direction(), Some(Direction::Backward));
    assert_eq!(Rule::Conjunction.direction(), None);
    assert!(Rule::ForwardCrossedComposition1.is_crossed());
    assert!(!Rule::ForwardComposition.is_crossed());
}

#[test]
fn test_orders() {
    assert_eq!(Rule::BackwardApplication.order(), Some(0));
    assert_eq!(Rule::ForwardComposition.order(), Some(1));
    assert_eq!(Rule::ForwardComposition4.order(), Some(4));
    assert_eq!(Rule::TypeRaise.order(), None);
    assert!(!Rule::Conjunction.is_combinatory());
}

#[test]
fn test_degree_constructors() {
    assert_eq!(Rule::forward_composition(0), Some(Rule::ForwardApplication));
    assert_eq!(Rule::forward_composition(2), Some(Rule::ForwardComposition2));
    assert_eq!(Rule::backward_composition(0), Some(Rule::BackwardApplication));
    assert_eq!(Rule::backward_composition(5), None);
}

#[test]
fn test_arity() {
    assert_eq!(Rule::Adverbial0.arity(), 1);
    assert_eq!(Rule::TypeRaise.arity(), 1);
    assert_eq!(Rule::Conjunction.arity(), 2);
    assert_eq!(Rule::ForwardApplication.arity(), 2);
}

#[test]
fn test_serde_uses_symbols() {
    let json = serde_json::to_string(&Rule::ForwardCrossedComposition1).unwrap();
    assert_eq!(json, r#"">Bx1""#);
    let rule: Rule = serde_json::from_str(r#""SSEQ""#).unwrap();
    assert_eq!(rule, Rule::Conjunction);
    assert!(serde_json::from_str::<Rule>(r#""?""#).is_err());
}

//! Type-raising NP arguments of verb phrases.

use rebranch::{Category, NodePath, RewriteError, Rule, apply_type_raise, printer::ja_of};
use rebranch_rewrite::MAX_VERB_ARITY;

use crate::utils::{assert_same_leaves, read_corpus, tree};

fn raised(text: &str) -> String {
    ja_of(&apply_type_raise(&tree(text)).unwrap())
}

fn cat(text: &str) -> Category {
    Category::parse(text).unwrap()
}

#[test]
fn test_subject_is_raised_over_its_verb_phrase() {
    assert_eq!(
        raised(r"{> S {S/S Today} {< S {NP Mary} {> S\NP {(S\NP)/NP ate} {NP apples}}}}"),
        r"{> S {S/S Today} {> S {>T S/(S\NP) {NP Mary}} {> S\NP {(S\NP)/NP ate} {NP apples}}}}"
    );
}

#[test]
fn test_every_argument_of_a_transitive_verb_is_raised() {
    let sentence = &read_corpus("ja.ccgbank")[0];
    let after = apply_type_raise(&sentence.tree).unwrap();
    assert_same_leaves(&sentence.tree, &after);
    assert_eq!(after.category(), sentence.tree.category());

    let root = after.children();
    assert_eq!(after.rule(), Some(Rule::ForwardApplication));
    assert_eq!(root[0].rule(), Some(Rule::TypeRaise));
    assert!(root[0].category().structurally_eq(&cat(r"S/(S\NP)")));
    assert_eq!(root[1].rule(), Some(Rule::ForwardApplication));

    let object = root[1].children()[0];
    assert_eq!(object.rule(), Some(Rule::TypeRaise));
    assert!(object.category().structurally_eq(&cat(r"(S\NP)/((S\NP)\NP)")));
}

#[test]
fn test_raised_category_keeps_verb_features() {
    let sentence = &read_corpus("ja.ccgbank")[0];
    let after = apply_type_raise(&sentence.tree).unwrap();
    let raised = after.children()[0].category();
    let result = raised.left().unwrap();
    assert_eq!(result.features().unwrap().get("form"), Some("base"));
    let argument = raised.right().unwrap().right().unwrap();
    assert_eq!(argument.features().unwrap().get("case"), Some("ga"));
}

#[test]
fn test_non_np_argument_is_unchanged() {
    let text = r"{< S {N a} {S\N b}}";
    assert_eq!(raised(text), text);
}

#[test]
fn test_non_verb_predicate_is_unchanged() {
    let text = r"{< NP {NP a} {NP\NP b}}";
    assert_eq!(raised(text), text);
}

#[test]
fn test_forward_application_is_unchanged() {
    let text = r"{> S {S/(S\NP) a} {S\NP b}}";
    assert_eq!(raised(text), text);
}

#[test]
fn test_categories_that_do_not_unify_are_unchanged() {
    let text = r"{< S {NP a} {S\PP b}}";
    assert_eq!(raised(text), text);
}

#[test]
fn test_raising_twice_changes_nothing() {
    for sentence in read_corpus("scenarios.ccgbank") {
        let once = apply_type_raise(&sentence.tree).unwrap();
        assert_eq!(apply_type_raise(&once).unwrap(), once);
    }
}

#[test]
fn test_largest_supported_verb() {
    let text = r"{< ((S\NP)\NP)\NP {NP a} {S\NP\NP\NP\NP b}}";
    assert_eq!(tree(text).children()[1].category().arity(), MAX_VERB_ARITY);
    assert_eq!(
        raised(text),
        r"{> ((S\NP)\NP)\NP {>T (((S\NP)\NP)\NP)/((((S\NP)\NP)\NP)\NP) {NP a}} {(((S\NP)\NP)\NP)\NP b}}"
    );
}

#[test]
fn test_unsupported_verb_shape() {
    let err = apply_type_raise(&tree(r"{< S {NP a} {S\NP\NP\NP\NP\NP b}}")).unwrap_err();
    assert!(matches!(
        err,
        RewriteError::UnsupportedCategoryShape { arity: 5, .. }
    ));
    assert_eq!(err.position(), &NodePath::root());
}

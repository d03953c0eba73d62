//! Corpus statistics over derivations.
//!
//! These are the counts reported alongside rotation experiments: how many
//! nodes each word closes, which combinators a corpus uses, which
//! (parent, right child) rule pairs are candidates for rebracketing, and
//! which NP/verb-phrase pairs meet the type-raise pass.

use std::collections::BTreeMap;
use std::fmt::Write;

use rebranch_category::Category;

use crate::{
    rule::Rule,
    tree::{Derivation, Token},
};

/// Nodes attributed to one word: the leaf itself plus every internal node
/// that is completed after it and before the next word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCount {
    pub word: String,
    pub count: usize,
}

/// Per-word node counts in sentence order. The counts sum to
/// [`Derivation::node_count`].
#[must_use]
pub fn node_counts(tree: &Derivation) -> Vec<NodeCount> {
    fn visit<'a>(node: &'a Derivation, closed: &mut usize, marks: &mut Vec<(&'a str, usize)>) {
        match node {
            Derivation::Leaf { token, .. } => marks.push((token.surface.as_str(), *closed)),
            Derivation::Unary { child, .. } => visit(child, closed, marks),
            Derivation::Binary { left, right, .. } => {
                visit(left, closed, marks);
                visit(right, closed, marks);
            }
        }
        *closed += 1;
    }

    let mut closed = 0;
    let mut marks = Vec::new();
    visit(tree, &mut closed, &mut marks);

    let ends = marks.iter().skip(1).map(|(_, at)| *at).chain([closed]);
    marks
        .iter()
        .zip(ends)
        .map(|((word, start), end)| NodeCount {
            word: (*word).to_string(),
            count: end - start,
        })
        .collect()
}

/// `word,count` lines.
#[must_use]
pub fn node_counts_csv(counts: &[NodeCount]) -> String {
    let mut out = String::new();
    for NodeCount { word, count } in counts {
        let _ = writeln!(out, "{word},{count}");
    }
    out
}

/// How often each rule labels a node across `trees`.
pub fn combinator_counts<'a>(
    trees: impl IntoIterator<Item = &'a Derivation>,
) -> BTreeMap<Rule, usize> {
    fn visit(node: &Derivation, counts: &mut BTreeMap<Rule, usize>) {
        for child in node.children() {
            visit(child, counts);
        }
        if let Some(rule) = node.rule() {
            *counts.entry(rule).or_default() += 1;
        }
    }

    let mut counts = BTreeMap::new();
    for tree in trees {
        visit(tree, &mut counts);
    }
    counts
}

/// A binary node whose right child is itself binary, reduced to its rules
/// and categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinatorPair {
    pub top: Rule,
    pub right: Rule,
    pub category: Category,
    pub left_category: Category,
    pub right_category: Category,
    pub inner_left_category: Category,
    pub inner_right_category: Category,
}

impl CombinatorPair {
    fn key(&self) -> [String; 7] {
        [
            self.top.symbol().to_string(),
            self.right.symbol().to_string(),
            self.category.to_string(),
            self.left_category.to_string(),
            self.right_category.to_string(),
            self.inner_left_category.to_string(),
            self.inner_right_category.to_string(),
        ]
    }

    /// A three-word derivation with this configuration, words `1 2 3`.
    #[must_use]
    pub fn example(&self) -> Derivation {
        let word = |n: &str| Token::new(n);
        Derivation::binary(
            self.top,
            self.category.clone(),
            Derivation::leaf(self.left_category.clone(), word("1")),
            Derivation::binary(
                self.right,
                self.right_category.clone(),
                Derivation::leaf(self.inner_left_category.clone(), word("2")),
                Derivation::leaf(self.inner_right_category.clone(), word("3")),
            ),
        )
    }
}

/// Distinct right-branching rule configurations in `trees`, sorted by
/// their textual form.
pub fn combinator_pairs<'a>(
    trees: impl IntoIterator<Item = &'a Derivation>,
) -> Vec<CombinatorPair> {
    fn visit(node: &Derivation, pairs: &mut BTreeMap<[String; 7], CombinatorPair>) {
        for child in node.children() {
            visit(child, pairs);
        }
        let Derivation::Binary {
            category,
            rule,
            left,
            right,
        } = node
        else {
            return;
        };
        if let Derivation::Binary {
            category: right_category,
            rule: right_rule,
            left: inner_left,
            right: inner_right,
        } = right.as_ref()
        {
            let pair = CombinatorPair {
                top: *rule,
                right: *right_rule,
                category: category.clone(),
                left_category: left.category().clone(),
                right_category: right_category.clone(),
                inner_left_category: inner_left.category().clone(),
                inner_right_category: inner_right.category().clone(),
            };
            pairs.entry(pair.key()).or_insert(pair);
        }
    }

    let mut pairs = BTreeMap::new();
    for tree in trees {
        visit(tree, &mut pairs);
    }
    pairs.into_values().collect()
}

/// NP/verb-phrase category pairs combined directly by a binary node, with
/// their frequency.
pub fn verb_list<'a>(
    trees: impl IntoIterator<Item = &'a Derivation>,
) -> BTreeMap<(String, String), usize> {
    fn visit(node: &Derivation, verbs: &mut BTreeMap<(String, String), usize>) {
        for child in node.children() {
            visit(child, verbs);
        }
        if let Derivation::Binary { left, right, .. } = node {
            let argument = left.category();
            let predicate = right.category();
            if argument.base() == Some("NP") && predicate.is_verb_phrase() {
                *verbs
                    .entry((argument.to_string(), predicate.to_string()))
                    .or_default() += 1;
            }
        }
    }

    let mut verbs = BTreeMap::new();
    for tree in trees {
        visit(tree, &mut verbs);
    }
    verbs
}

/// `key # count` lines, the listing format used for every frequency table.
#[must_use]
pub fn render_counts<K: std::fmt::Display>(counts: impl IntoIterator<Item = (K, usize)>) -> String {
    let mut out = String::new();
    for (key, count) in counts {
        let _ = writeln!(out, "{key} # {count}");
    }
    out
}

/// Number of distinct binary bracketings of `words` words, i.e. the
/// Catalan number `C(words - 1)`. `None` on overflow.
#[must_use]
pub fn catalan(words: usize) -> Option<u128> {
    if words == 0 {
        return Some(0);
    }
    let n = u128::try_from(words - 1).ok()?;
    let mut c: u128 = 1;
    for i in 0..n {
        c = c.checked_mul(2 * (2 * i + 1))? / (i + 2);
    }
    Some(c)
}

//! Derivation Trees
//!
//! A derivation is an owned tree of [`Derivation`] nodes. Rewrite passes never
//! mutate a tree; they build a new one and leave the input untouched, so
//! before/after snapshots of the same sentence never share nodes.

use core::fmt;
use std::fmt::{Display, Formatter};

use rebranch_category::Category;
use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// Placeholder for token fields the corpus leaves unspecified.
pub const UNKNOWN_FIELD: &str = "_";

/// The word at a leaf together with its morphological fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub base: String,
    pub pos: String,
    pub inflection: String,
}

impl Token {
    /// A token known only by its surface form.
    #[must_use]
    pub fn new(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        Self {
            base: surface.clone(),
            surface,
            pos: UNKNOWN_FIELD.to_string(),
            inflection: UNKNOWN_FIELD.to_string(),
        }
    }

    /// Reads `surface/base/pos/inflection`. Missing trailing fields default
    /// to the surface (for `base`) or `_`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut fields = text.splitn(4, '/');
        let surface = fields.next().unwrap_or_default().to_string();
        let base = fields
            .next()
            .map_or_else(|| surface.clone(), ToString::to_string);
        let pos = fields.next().unwrap_or(UNKNOWN_FIELD).to_string();
        let inflection = fields.next().unwrap_or(UNKNOWN_FIELD).to_string();
        Self {
            surface,
            base,
            pos,
            inflection,
        }
    }

    fn is_bare(&self) -> bool {
        self.base == self.surface && self.pos == UNKNOWN_FIELD && self.inflection == UNKNOWN_FIELD
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_bare() {
            write!(f, "{}", self.surface)
        } else {
            write!(
                f,
                "{}/{}/{}/{}",
                self.surface, self.base, self.pos, self.inflection
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Derivation {
    Leaf {
        category: Category,
        token: Token,
    },
    Unary {
        category: Category,
        rule: Rule,
        child: Box<Derivation>,
    },
    Binary {
        category: Category,
        rule: Rule,
        left: Box<Derivation>,
        right: Box<Derivation>,
    },
}

impl Derivation {
    #[must_use]
    pub fn leaf(category: Category, token: Token) -> Self {
        Derivation::Leaf { category, token }
    }

    #[must_use]
    pub fn unary(rule: Rule, category: Category, child: Derivation) -> Self {
        Derivation::Unary {
            category,
            rule,
            child: Box::new(child),
        }
    }

    #[must_use]
    pub fn binary(rule: Rule, category: Category, left: Derivation, right: Derivation) -> Self {
        Derivation::Binary {
            category,
            rule,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        match self {
            Derivation::Leaf { category, .. }
            | Derivation::Unary { category, .. }
            | Derivation::Binary { category, .. } => category,
        }
    }

    /// Rule at an internal node; `None` for leaves.
    #[must_use]
    pub fn rule(&self) -> Option<Rule> {
        match self {
            Derivation::Leaf { .. } => None,
            Derivation::Unary { rule, .. } | Derivation::Binary { rule, .. } => Some(*rule),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        match self {
            Derivation::Leaf { token, .. } => Some(token),
            _ => None,
        }
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Derivation::Leaf { .. })
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_unary(&self) -> bool {
        matches!(self, Derivation::Unary { .. })
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_binary(&self) -> bool {
        matches!(self, Derivation::Binary { .. })
    }

    #[must_use]
    pub fn children(&self) -> Vec<&Derivation> {
        match self {
            Derivation::Leaf { .. } => Vec::new(),
            Derivation::Unary { child, .. } => vec![child.as_ref()],
            Derivation::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Leaf nodes in left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Derivation> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Derivation>) {
        match self {
            Derivation::Leaf { .. } => out.push(self),
            Derivation::Unary { child, .. } => child.collect_leaves(out),
            Derivation::Binary { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Leaf tokens in left-to-right order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&Token> {
        self.leaves().into_iter().filter_map(Derivation::token).collect()
    }

    /// Surface forms in left-to-right order.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.tokens().into_iter().map(|t| t.surface.as_str()).collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Derivation::node_count)
            .sum::<usize>()
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Same node relabelled with `category`.
    #[must_use]
    pub fn with_category(self, category: Category) -> Self {
        match self {
            Derivation::Leaf { token, .. } => Derivation::Leaf { category, token },
            Derivation::Unary { rule, child, .. } => Derivation::Unary {
                category,
                rule,
                child,
            },
            Derivation::Binary {
                rule, left, right, ..
            } => Derivation::Binary {
                category,
                rule,
                left,
                right,
            },
        }
    }

    /// The rule of this node if its child count disagrees with the rule's arity.
    #[must_use]
    pub fn arity_violation(&self) -> Option<Rule> {
        match self {
            Derivation::Leaf { .. } => None,
            Derivation::Unary { rule, .. } => (rule.arity() != 1).then_some(*rule),
            Derivation::Binary { rule, .. } => (rule.arity() != 2).then_some(*rule),
        }
    }
}

/// Position of a node, as child indices from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(index);
        Self(steps)
    }

    #[must_use]
    pub fn steps(&self) -> &[usize] {
        &self.0
    }
}

impl Display for NodePath {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "root")?;
        for step in &self.0 {
            write!(f, "/{step}")?;
        }
        Ok(())
    }
}

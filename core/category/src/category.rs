//! Category Representation
//!
//! A CCG category is either atomic (`NP`, `S[mod=nm,form=da,fin=f]`) or a functor
//! `X/Y` / `X\Y` that seeks an argument `Y` to its right or left and yields `X`.
//!
//! Features are morphological annotations on atoms. The rewrite passes decide
//! validity structurally, so most comparisons go through [`Category::structurally_eq`]
//! which ignores features entirely.

use core::fmt;
use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{errors::CategoryError, parser};

/// Direction of the argument a functor category seeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slash {
    /// `/`: the argument is found to the right.
    Forward,
    /// `\`: the argument is found to the left.
    Backward,
}

impl Slash {
    #[must_use = "returns the slash character without modifying self"]
    pub const fn as_char(self) -> char {
        match self {
            Slash::Forward => '/',
            Slash::Backward => '\\',
        }
    }

    #[must_use = "this is a pure check with no side effects"]
    pub const fn is_forward(self) -> bool {
        matches!(self, Slash::Forward)
    }
}

impl Display for Slash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Feature annotations of an atomic category, e.g. `[case=ga,mod=nm,fin=f]`.
///
/// Insertion order is kept for display so that corpus categories print back
/// exactly as read, but equality and hashing treat the features as an
/// unordered mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Features(Vec<(String, String)>);

impl Features {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing an earlier value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn sorted(&self) -> Vec<&(String, String)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort();
        entries
    }
}

impl PartialEq for Features {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.sorted() == other.sorted()
    }
}

impl Eq for Features {}

impl Hash for Features {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Features {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut features = Features::new();
        for (name, value) in iter {
            features.insert(name, value);
        }
        features
    }
}

impl Display for Features {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        let rendered = self
            .0
            .iter()
            .map(|(name, value)| {
                if value.is_empty() {
                    name.clone()
                } else {
                    format!("{name}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "[{rendered}]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Atom {
        base: String,
        features: Features,
    },
    Functor {
        left: Box<Category>,
        slash: Slash,
        right: Box<Category>,
    },
}

impl Category {
    #[must_use]
    pub fn atom(base: impl Into<String>) -> Self {
        Category::Atom {
            base: base.into(),
            features: Features::new(),
        }
    }

    #[must_use]
    pub fn atom_with_features(base: impl Into<String>, features: Features) -> Self {
        Category::Atom {
            base: base.into(),
            features,
        }
    }

    #[must_use]
    pub fn functor(left: Category, slash: Slash, right: Category) -> Self {
        Category::Functor {
            left: Box::new(left),
            slash,
            right: Box::new(right),
        }
    }

    /// `left/right`
    #[must_use]
    pub fn forward(left: Category, right: Category) -> Self {
        Self::functor(left, Slash::Forward, right)
    }

    /// `left\right`
    #[must_use]
    pub fn backward(left: Category, right: Category) -> Self {
        Self::functor(left, Slash::Backward, right)
    }

    /// Parses category notation such as `(S\NP)/NP` or `NP[case=ga]`.
    ///
    /// # Errors
    ///
    /// Returns a [`CategoryError`] locating the first offending character.
    pub fn parse(text: &str) -> Result<Self, CategoryError> {
        parser::parse_category(text)
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_atomic(&self) -> bool {
        matches!(self, Category::Atom { .. })
    }

    #[must_use = "this is a pure check with no side effects"]
    pub fn is_functor(&self) -> bool {
        matches!(self, Category::Functor { .. })
    }

    /// Base symbol of an atomic category.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        match self {
            Category::Atom { base, .. } => Some(base),
            Category::Functor { .. } => None,
        }
    }

    #[must_use]
    pub fn features(&self) -> Option<&Features> {
        match self {
            Category::Atom { features, .. } => Some(features),
            Category::Functor { .. } => None,
        }
    }

    /// Result side of a functor (`X` in `X/Y`).
    #[must_use]
    pub fn left(&self) -> Option<&Category> {
        match self {
            Category::Functor { left, .. } => Some(left),
            Category::Atom { .. } => None,
        }
    }

    /// Argument side of a functor (`Y` in `X/Y`).
    #[must_use]
    pub fn right(&self) -> Option<&Category> {
        match self {
            Category::Functor { right, .. } => Some(right),
            Category::Atom { .. } => None,
        }
    }

    #[must_use]
    pub fn slash(&self) -> Option<Slash> {
        match self {
            Category::Functor { slash, .. } => Some(*slash),
            Category::Atom { .. } => None,
        }
    }

    /// Copy of this category with every feature removed.
    #[must_use = "returns a new category, the original is unchanged"]
    pub fn strip_features(&self) -> Category {
        match self {
            Category::Atom { base, .. } => Category::atom(base.clone()),
            Category::Functor { left, slash, right } => {
                Category::functor(left.strip_features(), *slash, right.strip_features())
            }
        }
    }

    /// Equality on shape, slash direction and atom bases; features are ignored.
    #[must_use = "this is a pure check with no side effects"]
    pub fn structurally_eq(&self, other: &Category) -> bool {
        match (self, other) {
            (Category::Atom { base: a, .. }, Category::Atom { base: b, .. }) => a == b,
            (
                Category::Functor {
                    left: l1,
                    slash: s1,
                    right: r1,
                },
                Category::Functor {
                    left: l2,
                    slash: s2,
                    right: r2,
                },
            ) => s1 == s2 && l1.structurally_eq(l2) && r1.structurally_eq(r2),
            _ => false,
        }
    }

    /// `X/X` or `X\X`.
    #[must_use = "this is a pure check with no side effects"]
    pub fn is_modifier(&self) -> bool {
        self.modified().is_some()
    }

    /// `X/X`: a pre-modifier that takes its target on the right.
    #[must_use = "this is a pure check with no side effects"]
    pub fn is_forward_modifier(&self) -> bool {
        self.slash() == Some(Slash::Forward) && self.is_modifier()
    }

    /// `X\X`: a post-modifier that takes its target on the left.
    #[must_use = "this is a pure check with no side effects"]
    pub fn is_post_modifier(&self) -> bool {
        self.slash() == Some(Slash::Backward) && self.is_modifier()
    }

    /// The category a modifier maps to itself (`X` in `X/X`).
    #[must_use]
    pub fn modified(&self) -> Option<&Category> {
        match self {
            Category::Functor { left, right, .. } if left.structurally_eq(right) => Some(right),
            _ => None,
        }
    }

    /// Number of arguments taken before the atomic result is reached.
    ///
    /// `S\NP` has arity 1, `(S\NP)\NP` arity 2, `NP` arity 0.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Category::Atom { .. } => 0,
            Category::Functor { left, .. } => 1 + left.arity(),
        }
    }

    /// The innermost result category, i.e. the leftmost atom.
    #[must_use]
    pub fn result(&self) -> &Category {
        match self {
            Category::Atom { .. } => self,
            Category::Functor { left, .. } => left.result(),
        }
    }

    /// Number of atoms anywhere in the category whose base is `base`.
    #[must_use]
    pub fn count_atoms(&self, base: &str) -> usize {
        match self {
            Category::Atom { base: b, .. } => usize::from(b == base),
            Category::Functor { left, right, .. } => {
                left.count_atoms(base) + right.count_atoms(base)
            }
        }
    }

    /// A verb phrase in the Japanese CCGBank sense: a functor whose result is
    /// `S` and which mentions `S` nowhere else (`S\NP`, `(S\NP)\NP`, ...).
    #[must_use = "this is a pure check with no side effects"]
    pub fn is_verb_phrase(&self) -> bool {
        self.is_functor() && self.result().base() == Some("S") && self.count_atoms("S") == 1
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Category::Atom { base, features } => write!(f, "{base}{features}"),
            Category::Functor { left, slash, right } => {
                write_operand(f, left)?;
                write!(f, "{slash}")?;
                write_operand(f, right)
            }
        }
    }
}

fn write_operand(f: &mut Formatter, operand: &Category) -> fmt::Result {
    if operand.is_functor() {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s)
    }
}

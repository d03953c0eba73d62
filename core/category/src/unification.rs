//! Structural unification of categories against rule patterns.
//!
//! A rule such as forward composition is written as a pair of patterns,
//! `a/b` for the left child and `b/c` for the right one. Atoms in a pattern
//! are variables that bind whole categories; `|` matches either slash and
//! binds the direction it saw under the name of the variable to its right,
//! so that `(a/c)|d` can be re-instantiated with the same direction later.
//!
//! Matching is structural: a variable that is bound twice must see two
//! categories that are equal once features are ignored. The first binding
//! is the one kept, features included.

use rustc_hash::FxHashMap;

use crate::{
    category::{Category, Slash},
    errors::CategoryError,
    parser,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlashPattern {
    Exact(Slash),
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Var(String),
    Functor {
        left: Box<Pattern>,
        slash: SlashPattern,
        right: Box<Pattern>,
    },
}

impl Pattern {
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Pattern::Var(name.into())
    }

    #[must_use]
    pub fn functor(left: Pattern, slash: SlashPattern, right: Pattern) -> Self {
        Pattern::Functor {
            left: Box::new(left),
            slash,
            right: Box::new(right),
        }
    }

    /// Parses pattern notation, e.g. `(a\c)|d`.
    ///
    /// # Errors
    ///
    /// Returns a [`CategoryError`] if the text is malformed, if a variable
    /// carries features, or if `|` is not followed by a variable.
    pub fn parse(text: &str) -> Result<Self, CategoryError> {
        parser::parse_pattern(text)
    }

    /// Name under which a `|` in front of this pattern records its direction.
    fn slash_key(&self) -> Option<&str> {
        match self {
            Pattern::Var(name) => Some(name),
            Pattern::Functor { .. } => None,
        }
    }
}

/// Variable assignments produced by a successful [`Unification::unify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    categories: FxHashMap<String, Category>,
    slashes: FxHashMap<String, Slash>,
}

impl Bindings {
    #[must_use]
    pub fn get(&self, var: &str) -> Option<&Category> {
        self.categories.get(var)
    }

    /// Direction seen by the `|` that precedes variable `var`.
    #[must_use]
    pub fn slash(&self, var: &str) -> Option<Slash> {
        self.slashes.get(var).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Instantiates `template` with the bound variables.
    ///
    /// Returns `None` when the template mentions a variable or a wildcard
    /// slash that was never bound.
    #[must_use]
    pub fn substitute(&self, template: &Pattern) -> Option<Category> {
        match template {
            Pattern::Var(name) => self.categories.get(name).cloned(),
            Pattern::Functor { left, slash, right } => {
                let slash = match slash {
                    SlashPattern::Exact(slash) => *slash,
                    SlashPattern::Any => self.slash(right.slash_key()?)?,
                };
                Some(Category::functor(
                    self.substitute(left)?,
                    slash,
                    self.substitute(right)?,
                ))
            }
        }
    }

    fn bind(&mut self, var: &str, category: &Category) -> bool {
        match self.categories.get(var) {
            Some(bound) => bound.structurally_eq(category),
            None => {
                self.categories.insert(var.to_string(), category.clone());
                true
            }
        }
    }

    fn bind_slash(&mut self, var: &str, slash: Slash) -> bool {
        match self.slashes.get(var) {
            Some(bound) => *bound == slash,
            None => {
                self.slashes.insert(var.to_string(), slash);
                true
            }
        }
    }

    fn matches(&mut self, pattern: &Pattern, category: &Category) -> bool {
        match (pattern, category) {
            (Pattern::Var(name), _) => self.bind(name, category),
            (
                Pattern::Functor {
                    left: pl,
                    slash: ps,
                    right: pr,
                },
                Category::Functor {
                    left: cl,
                    slash: cs,
                    right: cr,
                },
            ) => {
                let slash_ok = match ps {
                    SlashPattern::Exact(slash) => slash == cs,
                    SlashPattern::Any => match pr.slash_key() {
                        Some(key) => self.bind_slash(key, *cs),
                        None => true,
                    },
                };
                slash_ok && self.matches(pl, cl) && self.matches(pr, cr)
            }
            (Pattern::Functor { .. }, Category::Atom { .. }) => false,
        }
    }
}

/// A pair of patterns matched jointly against two adjacent categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unification {
    left: Pattern,
    right: Pattern,
}

impl Unification {
    /// Builds a unifier from two patterns in category notation.
    ///
    /// # Errors
    ///
    /// Returns the [`CategoryError`] of whichever pattern fails to parse.
    pub fn new(left: &str, right: &str) -> Result<Self, CategoryError> {
        Ok(Self::from_patterns(Pattern::parse(left)?, Pattern::parse(right)?))
    }

    #[must_use]
    pub fn from_patterns(left: Pattern, right: Pattern) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn left(&self) -> &Pattern {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &Pattern {
        &self.right
    }

    /// Matches `x` against the left pattern and `y` against the right one
    /// with a shared set of bindings.
    #[must_use]
    pub fn unify(&self, x: &Category, y: &Category) -> Option<Bindings> {
        let mut bindings = Bindings::default();
        (bindings.matches(&self.left, x) && bindings.matches(&self.right, y)).then_some(bindings)
    }
}

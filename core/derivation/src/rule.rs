//! Combinator Rules
//!
//! The closed set of rule symbols that label internal derivation nodes in the
//! Japanese CCGBank, plus the generalized compositions that rotation can
//! synthesize (`>B2`..`>B4`, `>Bx4`). Each combinatory rule has an order (the
//! composition degree, 0 for application), a direction, and a crossedness flag.

use core::fmt;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Highest composition degree the rule table knows about.
pub const MAX_COMPOSITION_DEGREE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rule {
    ForwardApplication,
    BackwardApplication,
    ForwardComposition,
    ForwardComposition2,
    ForwardComposition3,
    ForwardComposition4,
    ForwardCrossedComposition1,
    ForwardCrossedComposition2,
    ForwardCrossedComposition3,
    ForwardCrossedComposition4,
    BackwardComposition1,
    BackwardComposition2,
    BackwardComposition3,
    BackwardComposition4,
    Conjunction,
    AdnominalInternal,
    AdnominalExternal,
    Adverbial0,
    Adverbial1,
    Adverbial2,
    TypeRaise,
}

impl Rule {
    pub const ALL: &'static [Rule] = &[
        Rule::ForwardApplication,
        Rule::BackwardApplication,
        Rule::ForwardComposition,
        Rule::ForwardComposition2,
        Rule::ForwardComposition3,
        Rule::ForwardComposition4,
        Rule::ForwardCrossedComposition1,
        Rule::ForwardCrossedComposition2,
        Rule::ForwardCrossedComposition3,
        Rule::ForwardCrossedComposition4,
        Rule::BackwardComposition1,
        Rule::BackwardComposition2,
        Rule::BackwardComposition3,
        Rule::BackwardComposition4,
        Rule::Conjunction,
        Rule::AdnominalInternal,
        Rule::AdnominalExternal,
        Rule::Adverbial0,
        Rule::Adverbial1,
        Rule::Adverbial2,
        Rule::TypeRaise,
    ];

    /// The symbol used in corpus files, e.g. `>Bx1` or `ADNint`.
    #[must_use = "returns the symbol without modifying self"]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Rule::ForwardApplication => ">",
            Rule::BackwardApplication => "<",
            Rule::ForwardComposition => ">B",
            Rule::ForwardComposition2 => ">B2",
            Rule::ForwardComposition3 => ">B3",
            Rule::ForwardComposition4 => ">B4",
            Rule::ForwardCrossedComposition1 => ">Bx1",
            Rule::ForwardCrossedComposition2 => ">Bx2",
            Rule::ForwardCrossedComposition3 => ">Bx3",
            Rule::ForwardCrossedComposition4 => ">Bx4",
            Rule::BackwardComposition1 => "<B1",
            Rule::BackwardComposition2 => "<B2",
            Rule::BackwardComposition3 => "<B3",
            Rule::BackwardComposition4 => "<B4",
            Rule::Conjunction => "SSEQ",
            Rule::AdnominalInternal => "ADNint",
            Rule::AdnominalExternal => "ADNext",
            Rule::Adverbial0 => "ADV0",
            Rule::Adverbial1 => "ADV1",
            Rule::Adverbial2 => "ADV2",
            Rule::TypeRaise => ">T",
        }
    }

    /// Composition degree of a combinatory rule; `None` for the others.
    #[must_use]
    pub const fn order(&self) -> Option<u8> {
        match self {
            Rule::ForwardApplication | Rule::BackwardApplication => Some(0),
            Rule::ForwardComposition
            | Rule::ForwardCrossedComposition1
            | Rule::BackwardComposition1 => Some(1),
            Rule::ForwardComposition2
            | Rule::ForwardCrossedComposition2
            | Rule::BackwardComposition2 => Some(2),
            Rule::ForwardComposition3
            | Rule::ForwardCrossedComposition3
            | Rule::BackwardComposition3 => Some(3),
            Rule::ForwardComposition4
            | Rule::ForwardCrossedComposition4
            | Rule::BackwardComposition4 => Some(4),
            Rule::Conjunction
            | Rule::AdnominalInternal
            | Rule::AdnominalExternal
            | Rule::Adverbial0
            | Rule::Adverbial1
            | Rule::Adverbial2
            | Rule::TypeRaise => None,
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Rule::ForwardApplication
            | Rule::ForwardComposition
            | Rule::ForwardComposition2
            | Rule::ForwardComposition3
            | Rule::ForwardComposition4
            | Rule::ForwardCrossedComposition1
            | Rule::ForwardCrossedComposition2
            | Rule::ForwardCrossedComposition3
            | Rule::ForwardCrossedComposition4 => Some(Direction::Forward),
            Rule::BackwardApplication
            | Rule::BackwardComposition1
            | Rule::BackwardComposition2
            | Rule::BackwardComposition3
            | Rule::BackwardComposition4 => Some(Direction::Backward),
            _ => None,
        }
    }

    #[must_use = "this is a pure check with no side effects"]
    pub const fn is_forward(&self) -> bool {
        matches!(self.direction(), Some(Direction::Forward))
    }

    #[must_use = "this is a pure check with no side effects"]
    pub const fn is_backward(&self) -> bool {
        matches!(self.direction(), Some(Direction::Backward))
    }

    #[must_use = "this is a pure check with no side effects"]
    pub const fn is_crossed(&self) -> bool {
        matches!(
            self,
            Rule::ForwardCrossedComposition1
                | Rule::ForwardCrossedComposition2
                | Rule::ForwardCrossedComposition3
                | Rule::ForwardCrossedComposition4
        )
    }

    /// Application and composition rules, the only ones rotation may rebracket.
    #[must_use = "this is a pure check with no side effects"]
    pub const fn is_combinatory(&self) -> bool {
        self.order().is_some()
    }

    /// Number of children a node labelled with this rule has.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Rule::AdnominalInternal
            | Rule::AdnominalExternal
            | Rule::Adverbial0
            | Rule::Adverbial1
            | Rule::Adverbial2
            | Rule::TypeRaise => 1,
            _ => 2,
        }
    }

    /// Forward (harmonic) composition of the given degree; degree 0 is `>`.
    #[must_use]
    pub const fn forward_composition(degree: u8) -> Option<Rule> {
        match degree {
            0 => Some(Rule::ForwardApplication),
            1 => Some(Rule::ForwardComposition),
            2 => Some(Rule::ForwardComposition2),
            3 => Some(Rule::ForwardComposition3),
            4 => Some(Rule::ForwardComposition4),
            _ => None,
        }
    }

    /// Backward composition of the given degree; degree 0 is `<`.
    #[must_use]
    pub const fn backward_composition(degree: u8) -> Option<Rule> {
        match degree {
            0 => Some(Rule::BackwardApplication),
            1 => Some(Rule::BackwardComposition1),
            2 => Some(Rule::BackwardComposition2),
            3 => Some(Rule::BackwardComposition3),
            4 => Some(Rule::BackwardComposition4),
            _ => None,
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A rule symbol outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule symbol `{0}`")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|rule| rule.symbol() == s)
            .copied()
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

impl TryFrom<String> for Rule {
    type Error = UnknownRule;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.symbol().to_string()
    }
}

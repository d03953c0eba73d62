//! Error types for the category crate.

use thiserror::Error;

/// Errors raised while reading category or unification pattern notation.
///
/// Offsets are byte offsets into the text handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum CategoryError {
    #[error("offset {offset}: unexpected end of category")]
    UnexpectedEnd { offset: usize },

    #[error("offset {offset}: unexpected character `{found}`")]
    UnexpectedChar { found: char, offset: usize },

    #[error("offset {offset}: empty atomic category")]
    EmptyAtom { offset: usize },

    #[error("offset {offset}: malformed feature `{feature}`")]
    MalformedFeature { feature: String, offset: usize },

    #[error("offset {offset}: slash wildcard `|` is only allowed in unification patterns")]
    WildcardInCategory { offset: usize },

    #[error("offset {offset}: slash wildcard `|` must be followed by a pattern variable")]
    WildcardWithoutVariable { offset: usize },

    #[error("offset {offset}: pattern variable `{name}` cannot carry features")]
    FeaturedPatternVariable { name: String, offset: usize },
}

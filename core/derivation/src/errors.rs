//! Error types for reading derivations.

use rebranch_category::CategoryError;
use thiserror::Error;

use crate::rule::Rule;

/// Errors raised by the derivation reader.
///
/// Offsets are byte offsets into the derivation string; [`DerivationError::AtLine`]
/// adds the line number when a whole corpus file is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum DerivationError {
    #[error("offset {offset}: unknown rule symbol `{symbol}`")]
    UnknownRule { symbol: String, offset: usize },

    #[error("offset {offset}: rule `{rule}` expects {expected} children, found {found}")]
    ChildCount {
        rule: Rule,
        expected: usize,
        found: usize,
        offset: usize,
    },

    #[error("offset {offset}: invalid category `{text}`: {source}")]
    InvalidCategory {
        text: String,
        offset: usize,
        #[source]
        source: CategoryError,
    },

    #[error("offset {offset}: leaf has no surface token")]
    MissingToken { offset: usize },

    #[error("offset {offset}: expected {expected}")]
    Expected { expected: &'static str, offset: usize },

    #[error("offset {offset}: unexpected input after derivation")]
    TrailingInput { offset: usize },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<DerivationError>,
    },
}

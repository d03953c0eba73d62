//! Error types for rewrite passes.
//!
//! A rewrite that simply does not apply is never an error; these cover
//! trees the passes cannot process at all.

use rebranch_category::Category;
use rebranch_derivation::{NodePath, Rule};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum RewriteError {
    /// A node's child count disagrees with its rule, e.g. a unary node
    /// labelled `>`.
    #[error("{position}: rule `{rule}` labels a node with {arity} children")]
    ArityMismatch {
        rule: Rule,
        arity: usize,
        position: NodePath,
    },

    /// A verb phrase whose argument structure has no type-raising template.
    #[error("{position}: cannot type-raise against `{category}` with {arity} arguments")]
    UnsupportedCategoryShape {
        category: Category,
        arity: usize,
        position: NodePath,
    },
}

impl RewriteError {
    #[must_use]
    pub fn position(&self) -> &NodePath {
        match self {
            RewriteError::ArityMismatch { position, .. }
            | RewriteError::UnsupportedCategoryShape { position, .. } => position,
        }
    }
}

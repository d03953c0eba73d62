#![warn(clippy::pedantic)]
//! Rewrite Passes over CCG Derivations
//!
//! Two tree-to-tree passes that change how a derivation is bracketed but not
//! what it derives:
//!
//! - [`rotation::rotate`] turns right-branching application/composition
//!   chains into left-branching ones.
//! - [`type_raise::type_raise`] raises NP arguments of verb phrases so that
//!   they combine by forward application.
//!
//! Both passes are pure: they take a borrowed tree and return a new one.
//! A rewrite that does not apply at a node leaves it unchanged; errors are
//! reserved for malformed trees and for verb phrases outside the supported
//! shapes.

pub mod combinator;
pub mod errors;
pub mod rotation;
pub mod type_raise;

use rebranch_derivation::{Derivation, NodePath};

pub use errors::RewriteError;
pub use rotation::{Rebuilt, RotationCase, rotate};
pub use type_raise::{MAX_VERB_ARITY, type_raise};

pub(crate) fn check_arity(node: &Derivation, path: &NodePath) -> Result<(), RewriteError> {
    match node.arity_violation() {
        Some(rule) => Err(RewriteError::ArityMismatch {
            rule,
            arity: node.children().len(),
            position: path.clone(),
        }),
        None => Ok(()),
    }
}

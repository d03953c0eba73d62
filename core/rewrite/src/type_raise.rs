//! Type-raising of verb arguments.
//!
//! A noun phrase that a verb phrase consumes by backward application,
//!
//! ```text
//!        <  S                         >  S
//!       /    \                      /     \
//!     NP     S\NP        =>     >T S/(S\NP)  S\NP
//!                                  |
//!                                  NP
//! ```
//!
//! is raised over the verb phrase so that the two combine by forward
//! application instead, which gives rotation a forward chain to work with.

use rebranch_category::Category;
use rebranch_derivation::{Derivation, NodePath, Rule};
use tracing::debug;

use crate::{check_arity, combinator::unify_rule, errors::RewriteError};

/// Largest number of verb arguments a raised category is built for.
pub const MAX_VERB_ARITY: usize = 4;

/// Raises every NP argument of a verb phrase in `tree`, bottom-up.
///
/// # Errors
///
/// - [`RewriteError::ArityMismatch`] if a node's child count does not match
///   its rule.
/// - [`RewriteError::UnsupportedCategoryShape`] if a verb phrase taking more
///   than [`MAX_VERB_ARITY`] arguments consumes an NP.
pub fn type_raise(tree: &Derivation) -> Result<Derivation, RewriteError> {
    raise_at(tree, &NodePath::root())
}

fn raise_at(node: &Derivation, path: &NodePath) -> Result<Derivation, RewriteError> {
    check_arity(node, path)?;
    match node {
        Derivation::Leaf { .. } => Ok(node.clone()),
        Derivation::Unary {
            category,
            rule,
            child,
        } => Ok(Derivation::unary(
            *rule,
            category.clone(),
            raise_at(child, &path.child(0))?,
        )),
        Derivation::Binary {
            category,
            rule,
            left,
            right,
        } => {
            let left = raise_at(left, &path.child(0))?;
            let right = raise_at(right, &path.child(1))?;
            if *rule != Rule::BackwardApplication || !is_candidate(left.category(), right.category()) {
                return Ok(Derivation::binary(*rule, category.clone(), left, right));
            }

            let predicate = right.category();
            let Some(result) = unify_rule(Rule::BackwardApplication, left.category(), predicate)
                .and_then(|bindings| bindings.get("a").cloned())
            else {
                return Ok(Derivation::binary(*rule, category.clone(), left, right));
            };
            let arity = predicate.arity();
            if !(1..=MAX_VERB_ARITY).contains(&arity) {
                return Err(RewriteError::UnsupportedCategoryShape {
                    category: predicate.clone(),
                    arity,
                    position: path.clone(),
                });
            }

            let raised = Category::forward(result, predicate.clone());
            debug!(%path, argument = %left.category(), raised = %raised, "type-raised");
            Ok(Derivation::binary(
                Rule::ForwardApplication,
                category.clone(),
                Derivation::unary(Rule::TypeRaise, raised, left),
                right,
            ))
        }
    }
}

/// An atomic `NP` next to a verb phrase.
fn is_candidate(argument: &Category, predicate: &Category) -> bool {
    argument.base() == Some("NP") && predicate.is_verb_phrase()
}

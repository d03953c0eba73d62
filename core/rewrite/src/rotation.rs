//! Rotation to Left-Branching Form
//!
//! Rebrackets right-branching chains of application and composition into
//! left-branching ones without changing the words, the leaf categories, or
//! the category at the root:
//!
//! ```text
//!        >Bx                       >By
//!       /   \        x >= y       /   \
//!      a    >By        =>    >B(x-y+1) c
//!          /   \              /   \
//!         b     c            a     b
//! ```
//!
//! The tree is processed bottom-up. At every binary node the right child is
//! inspected and the configuration is classified into a [`RotationCase`]; the
//! case then rebuilds the node, recursing down the left spine of the right
//! child when the new left subtree can itself be rotated. Every new category
//! comes from unifying the children under the new rule, so a configuration
//! whose categories do not line up is left as it was.

use rebranch_category::Category;
use rebranch_derivation::{Derivation, NodePath, Rule};
use tracing::{debug, trace};

use crate::{check_arity, combinator::combine, errors::RewriteError};

/// Outcome of trying to rebuild one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rebuilt {
    Rewritten(Derivation),
    NotApplicable,
}

impl Rebuilt {
    fn or_else(self, fallback: impl FnOnce() -> Rebuilt) -> Rebuilt {
        match self {
            Rebuilt::Rewritten(_) => self,
            Rebuilt::NotApplicable => fallback(),
        }
    }

    fn and_then(self, next: impl FnOnce(Derivation) -> Rebuilt) -> Rebuilt {
        match self {
            Rebuilt::Rewritten(tree) => next(tree),
            Rebuilt::NotApplicable => Rebuilt::NotApplicable,
        }
    }
}

/// The local configuration `op(a, inner(b, c))` that decides how a node is
/// rebracketed. Variants are listed in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationCase {
    /// Both rules forward and harmonic with `order(op) >= order(inner)`.
    /// `a` and `b` combine first by forward composition of `left_order`.
    ForwardChain { left_order: u8 },
    /// Both rules backward with `order(inner) >= 1`. `a` and `b` combine by
    /// backward composition of `left_order`, the result with `c` by
    /// backward composition of `top_order`.
    BackwardChain { left_order: u8, top_order: u8 },
    /// `a = X/X` over a backward node whose right edge is `c = X\X`.
    ModifierOverPostModifier,
    /// `a = X/X` over a forward node whose left child `b` is also `X/X`.
    StackedModifiers,
    /// `>` over `<By` whose right edge is a post-modifier. `a` and `b`
    /// combine by `>`; the degree of the backward composition with `c` is
    /// the number of arguments that result still takes beyond the
    /// post-modifier's target.
    ApplicationOverBackwardComposition,
}

impl RotationCase {
    fn classify(op: Rule, a: &Derivation, inner: Rule, b: &Derivation, c: &Derivation) -> Option<Self> {
        let x = op.order()?;
        let y = inner.order()?;
        let (a, b, c) = (a.category(), b.category(), c.category());
        let harmonic_forward = |rule: Rule| rule.is_forward() && !rule.is_crossed();

        if harmonic_forward(op) && harmonic_forward(inner) && x >= y {
            return Some(RotationCase::ForwardChain {
                left_order: x - y + 1,
            });
        }
        if op.is_backward() && inner.is_backward() && y >= 1 {
            return Some(RotationCase::BackwardChain {
                left_order: x,
                top_order: x + y - 1,
            });
        }
        if op.is_forward()
            && inner.is_backward()
            && a.is_forward_modifier()
            && c.is_post_modifier()
            && same_target(a, c)
        {
            return Some(RotationCase::ModifierOverPostModifier);
        }
        if op.is_forward()
            && inner.is_forward()
            && a.is_forward_modifier()
            && b.is_forward_modifier()
            && same_target(a, b)
        {
            return Some(RotationCase::StackedModifiers);
        }
        if op == Rule::ForwardApplication && inner.is_backward() && y >= 1 && c.is_post_modifier() {
            return Some(RotationCase::ApplicationOverBackwardComposition);
        }
        None
    }
}

fn same_target(x: &Category, y: &Category) -> bool {
    match (x.modified(), y.modified()) {
        (Some(x), Some(y)) => x.structurally_eq(y),
        _ => false,
    }
}

/// Rotates every binary node of `tree` towards left-branching form.
///
/// A node is replaced only when the rebuilt subtree derives the same
/// category (ignoring features); the original category is kept on it.
///
/// # Errors
///
/// Returns [`RewriteError::ArityMismatch`] if a node's child count does not
/// match its rule.
pub fn rotate(tree: &Derivation) -> Result<Derivation, RewriteError> {
    rotate_at(tree, &NodePath::root())
}

fn rotate_at(node: &Derivation, path: &NodePath) -> Result<Derivation, RewriteError> {
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
            rotate_at(child, &path.child(0))?,
        )),
        Derivation::Binary {
            category,
            rule,
            left,
            right,
        } => {
            let left = rotate_at(left, &path.child(0))?;
            let right = rotate_at(right, &path.child(1))?;
            match rebuild(*rule, &left, &right) {
                Rebuilt::Rewritten(tree) if tree.category().structurally_eq(category) => {
                    debug!(%path, rule = %rule, category = %category, "rotated");
                    Ok(tree.with_category(category.clone()))
                }
                Rebuilt::Rewritten(tree) => {
                    trace!(
                        %path,
                        expected = %category,
                        found = %tree.category(),
                        "rotation changes category, keeping node"
                    );
                    Ok(Derivation::binary(*rule, category.clone(), left, right))
                }
                Rebuilt::NotApplicable => {
                    Ok(Derivation::binary(*rule, category.clone(), left, right))
                }
            }
        }
    }
}

/// Rebuilds `op(a, r)` in left-branching form.
#[must_use]
pub fn rebuild(op: Rule, a: &Derivation, r: &Derivation) -> Rebuilt {
    let Derivation::Binary {
        rule: inner,
        left: b,
        right: c,
        ..
    } = r
    else {
        return Rebuilt::NotApplicable;
    };
    let inner = *inner;
    if inner == Rule::Conjunction || !op.is_combinatory() || !inner.is_combinatory() {
        return Rebuilt::NotApplicable;
    }
    let Some(case) = RotationCase::classify(op, a, inner, b, c) else {
        trace!(op = %op, inner = %inner, "no rotation case");
        return Rebuilt::NotApplicable;
    };
    trace!(op = %op, inner = %inner, ?case, "rotation case");

    match case {
        RotationCase::ForwardChain { left_order } => match Rule::forward_composition(left_order) {
            Some(left_rule) => chain(left_rule, inner, a, b, c),
            None => Rebuilt::NotApplicable,
        },
        RotationCase::BackwardChain {
            left_order,
            top_order,
        } => match (
            Rule::backward_composition(left_order),
            Rule::backward_composition(top_order),
        ) {
            (Some(left_rule), Some(top_rule)) => chain(left_rule, top_rule, a, b, c),
            _ => Rebuilt::NotApplicable,
        },
        RotationCase::ModifierOverPostModifier => chain(op, inner, a, b, c),
        RotationCase::StackedModifiers => {
            sink_modifier(a, b).and_then(|left| join(inner, left, c.as_ref().clone()))
        }
        RotationCase::ApplicationOverBackwardComposition => rebuild(op, a, b)
            .or_else(|| join(op, a.clone(), b.as_ref().clone()))
            .and_then(|left| {
                match post_modifier_degree(left.category(), c.category())
                    .and_then(Rule::backward_composition)
                {
                    Some(top_rule) => join(top_rule, left, c.as_ref().clone()),
                    None => Rebuilt::NotApplicable,
                }
            }),
    }
}

/// Arguments `left` takes beyond the target of the post-modifier `c`.
fn post_modifier_degree(left: &Category, c: &Category) -> Option<u8> {
    let target = c.modified()?;
    let degree = left.arity().checked_sub(target.arity())?;
    u8::try_from(degree).ok()
}

/// `top_rule(left_rule(a, b), c)`, rotating `left_rule(a, b)` further when
/// `b` is itself right-branching.
fn chain(left_rule: Rule, top_rule: Rule, a: &Derivation, b: &Derivation, c: &Derivation) -> Rebuilt {
    rebuild(left_rule, a, b)
        .or_else(|| join(left_rule, a.clone(), b.clone()))
        .and_then(|left| join(top_rule, left, c.clone()))
}

/// Attaches the modifier `a = X/X` to `target`. If `target` is a unary node
/// built directly on an `X`, the modifier goes below the unary rule.
fn sink_modifier(a: &Derivation, target: &Derivation) -> Rebuilt {
    if let Derivation::Unary {
        category,
        rule,
        child,
    } = target
        && let Some(x) = a.category().modified()
        && child.category().structurally_eq(x)
    {
        return rebuild(Rule::ForwardApplication, a, child)
            .or_else(|| join(Rule::ForwardApplication, a.clone(), child.as_ref().clone()))
            .and_then(|inner| Rebuilt::Rewritten(Derivation::unary(*rule, category.clone(), inner)));
    }
    rebuild(Rule::ForwardComposition, a, target)
        .or_else(|| join(Rule::ForwardComposition, a.clone(), target.clone()))
}

/// A new binary node whose category is derived by unification.
fn join(rule: Rule, left: Derivation, right: Derivation) -> Rebuilt {
    match combine(rule, left.category(), right.category()) {
        Some(category) => Rebuilt::Rewritten(Derivation::binary(rule, category, left, right)),
        None => Rebuilt::NotApplicable,
    }
}

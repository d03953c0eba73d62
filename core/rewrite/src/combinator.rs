//! Parent categories of binary rules, computed by unification.
//!
//! Each combinatory rule is a pair of child patterns and a result pattern:
//!
//! ```text
//! >      a/b            b                  => a
//! <      b              a\b                => a
//! >Bn    a/b            (b/c)|d|e...       => (a/c)|d|e...
//! >Bxn   a/b            (b\c)|d|e...       => (a\c)|d|e...
//! <Bn    (b\c)|d|e...   a\b                => (a\c)|d|e...
//! ```
//!
//! Degree `n` composition carries `n - 1` extra arguments (`d`, `e`, `f`),
//! each behind a slash of either direction.

use rebranch_category::{Bindings, Category, Pattern, Slash, SlashPattern, Unification};
use rebranch_derivation::{Direction, Rule};

const PASSED_ARGUMENTS: [&str; 3] = ["d", "e", "f"];

struct RulePatterns {
    unification: Unification,
    result: Pattern,
}

fn exact(left: Pattern, slash: Slash, right: Pattern) -> Pattern {
    Pattern::functor(left, SlashPattern::Exact(slash), right)
}

/// `(inner)|d|e...` with `extra` passed-through arguments.
fn pass_through(inner: Pattern, extra: usize) -> Pattern {
    PASSED_ARGUMENTS
        .iter()
        .take(extra)
        .fold(inner, |acc, var| {
            Pattern::functor(acc, SlashPattern::Any, Pattern::var(*var))
        })
}

fn patterns(rule: Rule) -> Option<RulePatterns> {
    let order = usize::from(rule.order()?);
    let var = Pattern::var;
    let (left, right, result) = match (rule.direction()?, order) {
        (Direction::Forward, 0) => (
            exact(var("a"), Slash::Forward, var("b")),
            var("b"),
            var("a"),
        ),
        (Direction::Backward, 0) => (
            var("b"),
            exact(var("a"), Slash::Backward, var("b")),
            var("a"),
        ),
        (Direction::Forward, n) => {
            let slash = if rule.is_crossed() {
                Slash::Backward
            } else {
                Slash::Forward
            };
            (
                exact(var("a"), Slash::Forward, var("b")),
                pass_through(exact(var("b"), slash, var("c")), n - 1),
                pass_through(exact(var("a"), slash, var("c")), n - 1),
            )
        }
        (Direction::Backward, n) => (
            pass_through(exact(var("b"), Slash::Backward, var("c")), n - 1),
            exact(var("a"), Slash::Backward, var("b")),
            pass_through(exact(var("a"), Slash::Backward, var("c")), n - 1),
        ),
    };
    Some(RulePatterns {
        unification: Unification::from_patterns(left, right),
        result,
    })
}

/// Bindings of `rule`'s child patterns against `left` and `right`.
#[must_use]
pub fn unify_rule(rule: Rule, left: &Category, right: &Category) -> Option<Bindings> {
    patterns(rule)?.unification.unify(left, right)
}

/// Category of a `rule` node over children `left` and `right`; `None` if the
/// children do not fit the rule or the rule is not combinatory.
#[must_use]
pub fn combine(rule: Rule, left: &Category, right: &Category) -> Option<Category> {
    let RulePatterns {
        unification,
        result,
    } = patterns(rule)?;
    unification.unify(left, right)?.substitute(&result)
}

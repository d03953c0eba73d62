//! Text renderings of derivations.
//!
//! - [`ja_of`]: the bracketed corpus format, read back by [`crate::reader`].
//! - [`auto_of`]: the `AUTO` bracket format of the English CCGBank.
//! - [`deriv_of`]: an indented listing of rule applications for eyeballing.

use std::fmt::Write;

use crate::{rule::Rule, tree::Derivation};

#[must_use]
pub fn ja_of(tree: &Derivation) -> String {
    let mut out = String::new();
    write_ja(tree, &mut out);
    out
}

fn write_ja(node: &Derivation, out: &mut String) {
    match node {
        Derivation::Leaf { category, token } => {
            let _ = write!(out, "{{{category} {token}}}");
        }
        Derivation::Unary {
            category,
            rule,
            child,
        } => {
            let _ = write!(out, "{{{rule} {category} ");
            write_ja(child, out);
            out.push('}');
        }
        Derivation::Binary {
            category,
            rule,
            left,
            right,
        } => {
            let _ = write!(out, "{{{rule} {category} ");
            write_ja(left, out);
            out.push(' ');
            write_ja(right, out);
            out.push('}');
        }
    }
}

/// Head child index used by the `AUTO` format: the functor side of the rule.
#[must_use]
pub fn head_index(rule: Rule) -> usize {
    usize::from(rule.is_backward() || rule == Rule::Conjunction)
}

#[must_use]
pub fn auto_of(tree: &Derivation) -> String {
    let mut out = String::new();
    write_auto(tree, &mut out);
    out
}

fn write_auto(node: &Derivation, out: &mut String) {
    match node {
        Derivation::Leaf { category, token } => {
            let _ = write!(
                out,
                "(<L {category} {pos} {pos} {word} {category}>)",
                pos = token.pos,
                word = token.surface
            );
        }
        Derivation::Unary { .. } | Derivation::Binary { .. } => {
            let children = node.children();
            let head = node.rule().map_or(0, head_index);
            let _ = write!(out, "(<T {} {head} {}> ", node.category(), children.len());
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_auto(child, out);
            }
            out.push_str(" )");
        }
    }
}

/// Words on the first line, then one line per rule application in
/// bottom-up order, indented two spaces per level of depth.
#[must_use]
pub fn deriv_of(tree: &Derivation) -> String {
    let mut out = tree.words().join(" ");
    out.push('\n');
    write_deriv(tree, 0, &mut out);
    out
}

fn write_deriv(node: &Derivation, depth: usize, out: &mut String) {
    let children = node.children();
    for child in &children {
        write_deriv(child, depth + 1, out);
    }
    let Some(rule) = node.rule() else {
        return;
    };
    let inputs = children
        .iter()
        .map(|child| child.category().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        out,
        "{:indent$}{rule}: {inputs} => {}",
        "",
        node.category(),
        indent = depth * 2
    );
}

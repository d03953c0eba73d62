#![warn(clippy::pedantic)]
//! CCG Categories for the Rebranch Toolkit
//!
//! This crate models the syntactic categories of Combinatory Categorial Grammar
//! as they appear in the Japanese CCGBank and in depccg output, and provides the
//! structural unification that every combinator and rewrite pass is built on.
//!
//! ## Notation
//!
//! ```text
//! NP[case=ga,mod=nm,fin=f]      atomic category with features
//! S\NP                          functor seeking NP on the left, yielding S
//! (S\NP)/NP                     parentheses group, slashes associate left
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rebranch_category::{Category, Unification};
//!
//! let unifier = Unification::new("a/b", "b/c")?;
//! let left: Category = "S/S".parse()?;
//! let right: Category = r"S/NP".parse()?;
//! let bindings = unifier.unify(&left, &right).expect("composable");
//! assert_eq!(bindings.get("c").map(ToString::to_string).as_deref(), Some("NP"));
//! # Ok::<(), rebranch_category::CategoryError>(())
//! ```
//!
//! Unification never fails with an error: a category pair that does not fit
//! the patterns simply yields `None`. Errors are reserved for notation that
//! cannot be read at all.

pub mod category;
pub mod errors;
mod parser;
pub mod unification;

pub use category::{Category, Features, Slash};
pub use errors::CategoryError;
pub use unification::{Bindings, Pattern, SlashPattern, Unification};

#![warn(clippy::pedantic)]
//! CCG Derivations for the Rebranch Toolkit
//!
//! Owned derivation trees over [`rebranch_category::Category`], the closed
//! combinator rule table of the Japanese CCGBank, and the text formats and
//! corpus statistics built around them.
//!
//! ## Modules
//!
//! - [`rule`]: rule symbols with their composition order, direction and arity
//! - [`tree`]: leaf, unary and binary derivation nodes
//! - [`reader`]: the bracketed corpus format (`{> S {S/S a} {S b}}`)
//! - [`printer`]: corpus, `AUTO` and indented text renderings
//! - [`stats`]: node counts, combinator frequencies, Catalan bounds
//!
//! ## Example
//!
//! ```rust
//! use rebranch_derivation::{printer::ja_of, reader::parse_derivation, Rule};
//!
//! let tree = parse_derivation(r"{< S {NP Mary} {S\NP runs}}")?;
//! assert_eq!(tree.rule(), Some(Rule::BackwardApplication));
//! assert_eq!(tree.words(), vec!["Mary", "runs"]);
//! assert_eq!(ja_of(&tree), r"{< S {NP Mary} {S\NP runs}}");
//! # Ok::<(), rebranch_derivation::DerivationError>(())
//! ```

pub mod errors;
pub mod printer;
pub mod reader;
pub mod rule;
pub mod stats;
pub mod tree;

pub use errors::DerivationError;
pub use reader::Sentence;
pub use rule::{Direction, Rule};
pub use tree::{Derivation, NodePath, Token};

#![warn(clippy::pedantic)]
//! Left-Branching Conversion for Japanese CCG Derivations
//!
//! This crate is the entry point of the rebranch toolkit. It ties the rewrite
//! passes of [`rebranch_rewrite`] into whole-tree operations and a corpus
//! pipeline:
//!
//! ```text
//! derivation → type-raise → rotation (≤ N passes) → printers / statistics
//! ```
//!
//! Each stage is exposed as a standalone function, so either pass can be
//! run alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use rebranch::{apply_rotation, parse_derivation, printer::ja_of};
//!
//! let right = parse_derivation(
//!     r"{> S {S/S Today} {> S {>B S/NP {S/(S\NP) Mary} {(S\NP)/NP ate}} {NP apples}}}",
//! )?;
//! let left = apply_rotation(&right)?;
//! assert_eq!(
//!     ja_of(&left),
//!     r"{> S {>B S/NP {>B S/(S\NP) {S/S Today} {S/(S\NP) Mary}} {(S\NP)/NP ate}} {NP apples}}",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Repeated Rotation
//!
//! A rewrite at one node can expose a new rotation at its parent, so a single
//! pass does not always reach the most left-branching form.
//! [`apply_rotation_until_fixpoint`] repeats the pass until the tree stops
//! changing, bounded by a caller-chosen number of passes
//! ([`DEFAULT_ROTATION_PASSES`] in the pipeline).
//!
//! ## Batches
//!
//! [`Pipeline::run_batch`] processes sentences independently. A sentence
//! that fails is recorded in the [`BatchReport`] and logged; the rest of the
//! corpus is still processed.

pub mod pipeline;

use tracing::debug;

pub use pipeline::{
    BatchReport, Pipeline, PipelineOptions, ProcessedSentence, SentenceFailure, Stages,
};
pub use rebranch_category::{Category, CategoryError, Slash};
pub use rebranch_derivation::{
    Derivation, DerivationError, NodePath, Rule, Sentence, Token, printer,
    reader::{parse_derivation, read_derivations},
    stats,
};
pub use rebranch_rewrite::{RewriteError, RotationCase};

/// Rotation passes run by the pipeline unless configured otherwise.
pub const DEFAULT_ROTATION_PASSES: usize = 3;

/// Raises the NP arguments of verb phrases in `tree`.
///
/// # Errors
///
/// Returns [`RewriteError::ArityMismatch`] for a malformed tree and
/// [`RewriteError::UnsupportedCategoryShape`] for a verb phrase with more
/// arguments than the raised categories cover.
pub fn apply_type_raise(tree: &Derivation) -> Result<Derivation, RewriteError> {
    rebranch_rewrite::type_raise(tree)
}

/// One bottom-up rotation pass over `tree`.
///
/// # Errors
///
/// Returns [`RewriteError::ArityMismatch`] for a malformed tree.
pub fn apply_rotation(tree: &Derivation) -> Result<Derivation, RewriteError> {
    rebranch_rewrite::rotate(tree)
}

/// Result of [`apply_rotation_until_fixpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixpoint {
    pub tree: Derivation,
    /// Passes that changed the tree.
    pub passes: usize,
    /// Whether a pass was observed to leave the tree unchanged.
    pub converged: bool,
}

/// Rotates `tree` until a pass changes nothing, running at most
/// `max_passes` passes.
///
/// # Errors
///
/// Returns [`RewriteError::ArityMismatch`] for a malformed tree.
pub fn apply_rotation_until_fixpoint(
    tree: &Derivation,
    max_passes: usize,
) -> Result<Fixpoint, RewriteError> {
    let mut current = tree.clone();
    for pass in 0..max_passes {
        let next = apply_rotation(&current)?;
        if next == current {
            debug!(passes = pass, "rotation reached a fixpoint");
            return Ok(Fixpoint {
                tree: current,
                passes: pass,
                converged: true,
            });
        }
        current = next;
    }
    Ok(Fixpoint {
        tree: current,
        passes: max_passes,
        converged: false,
    })
}

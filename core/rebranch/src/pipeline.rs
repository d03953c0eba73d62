//! Corpus Pipeline
//!
//! Runs type-raising and then rotation over each sentence, keeping the tree
//! produced by every stage so that callers can print or count all of them.

use rebranch_derivation::{Derivation, Sentence};
use rebranch_rewrite::RewriteError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{DEFAULT_ROTATION_PASSES, apply_rotation_until_fixpoint, apply_type_raise};

/// Knobs of the pipeline. Missing fields take their [`Default`] values when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Run the type-raise pass before rotation.
    pub type_raise: bool,
    /// Upper bound on rotation passes per sentence.
    pub rotation_passes: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            type_raise: true,
            rotation_passes: DEFAULT_ROTATION_PASSES,
        }
    }
}

/// Trees produced for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stages {
    /// The input derivation.
    pub right: Derivation,
    /// After type-raising; `None` when the pass is disabled.
    pub type_raised: Option<Derivation>,
    /// After rotation.
    pub left: Derivation,
    /// Rotation passes that changed the tree.
    pub rotation_passes: usize,
    pub converged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedSentence {
    pub id: String,
    pub stages: Stages,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceFailure {
    pub id: String,
    pub error: RewriteError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub sentences: Vec<ProcessedSentence>,
    pub failures: Vec<SentenceFailure>,
}

impl BatchReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn failures(&self) -> &[SentenceFailure] {
        &self.failures
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    #[must_use]
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn with_type_raise(mut self, enabled: bool) -> Self {
        self.options.type_raise = enabled;
        self
    }

    #[must_use]
    pub fn with_rotation_passes(mut self, passes: usize) -> Self {
        self.options.rotation_passes = passes;
        self
    }

    #[must_use]
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Runs the enabled stages over one tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`RewriteError`] raised by either pass.
    pub fn run(&self, tree: &Derivation) -> Result<Stages, RewriteError> {
        let type_raised = if self.options.type_raise {
            Some(apply_type_raise(tree)?)
        } else {
            None
        };
        let fixpoint =
            apply_rotation_until_fixpoint(type_raised.as_ref().unwrap_or(tree), self.options.rotation_passes)?;
        Ok(Stages {
            right: tree.clone(),
            type_raised,
            left: fixpoint.tree,
            rotation_passes: fixpoint.passes,
            converged: fixpoint.converged,
        })
    }

    /// Runs every sentence independently; failures are collected, not raised.
    #[must_use]
    pub fn run_batch(&self, sentences: &[Sentence]) -> BatchReport {
        let mut report = BatchReport::default();
        for Sentence { id, tree } in sentences {
            match self.run(tree) {
                Ok(stages) => report.sentences.push(ProcessedSentence {
                    id: id.clone(),
                    stages,
                }),
                Err(error) => {
                    warn!(sentence = %id, %error, "sentence skipped");
                    report.failures.push(SentenceFailure {
                        id: id.clone(),
                        error,
                    });
                }
            }
        }
        info!(
            passed = report.passed(),
            failed = report.failed(),
            "batch finished"
        );
        report
    }
}

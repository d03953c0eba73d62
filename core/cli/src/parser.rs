//! Command line argument parsing for the rebranch tool.
//!
//! This module defines the CLI interface using `clap`. The `Cli` struct captures
//! all command line flags and arguments passed to the `rebranch` binary.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use rebranch::{DEFAULT_ROTATION_PASSES, PipelineOptions};

/// Command line interface definition for the rebranch tool.
///
/// `rebranch` reads a file of Japanese CCGBank derivations (one per line),
/// type-raises NP arguments of verb phrases, rotates every derivation towards
/// left-branching form, and writes the tree of each stage to an output
/// directory.
///
/// ## Output Layout
///
/// ```text
/// <out>/text/right.txt          input derivations, re-rendered
/// <out>/text/typeraised.txt     after type-raising (unless --no-type-raise)
/// <out>/text/left.txt           after rotation
/// <out>/NodeCount/<stage>.csv   per-word node counts        (--stats)
/// <out>/combinators.txt         rule frequencies per stage  (--stats)
/// <out>/pairs.txt               right-branching rule pairs  (--stats)
/// <out>/verbs.txt               NP / verb-phrase pairs      (--stats)
/// <out>/catalan.csv             bracketing bounds           (--stats)
/// ```
///
/// ## Examples
///
/// Convert with defaults, writing next to the input:
/// ```bash
/// rebranch corpus/test.ccgbank
/// ```
///
/// Rotation only, `AUTO` output, with statistics:
/// ```bash
/// rebranch corpus/test.ccgbank --no-type-raise --format auto --stats -o out
/// ```
#[derive(Parser)]
#[command(
    name = "rebranch",
    author,
    version,
    about = "Left-branching conversion of Japanese CCG derivations",
    long_about = "The 'rebranch' command reads bracketed CCG derivations, optionally type-raises NP \
arguments of verb phrases, rotates each derivation towards left-branching form and writes every stage."
)]
pub(crate) struct Cli {
    /// Path to the derivation file, one derivation per line.
    pub(crate) path: PathBuf,

    /// Output directory.
    ///
    /// Defaults to a directory next to the input named after its file stem,
    /// e.g. `corpus/test.ccgbank` writes to `corpus/test/`.
    #[clap(short = 'o', long = "out")]
    pub(crate) out: Option<PathBuf>,

    /// Rendering used for the derivation files.
    #[clap(long = "format", value_enum, default_value_t = OutputFormat::Ja)]
    pub(crate) format: OutputFormat,

    /// Upper bound on rotation passes per derivation.
    ///
    /// Rotation is repeated until a pass leaves the tree unchanged or this
    /// many passes have run.
    #[clap(long = "rotation-passes", default_value_t = DEFAULT_ROTATION_PASSES)]
    pub(crate) rotation_passes: usize,

    /// Skip the type-raise pass and rotate the input derivations directly.
    #[clap(long = "no-type-raise", action = clap::ArgAction::SetTrue)]
    pub(crate) no_type_raise: bool,

    /// Also write node counts, combinator frequencies and related statistics.
    #[clap(long = "stats", action = clap::ArgAction::SetTrue)]
    pub(crate) stats: bool,

    /// Increase log verbosity (`-v` info, `-vv` debug). `RUST_LOG` takes
    /// precedence when set.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Bracketed corpus format, readable by this tool.
    Ja,
    /// `AUTO` format of the English CCGBank.
    Auto,
    /// Indented rule listing.
    Deriv,
    /// One JSON object per derivation.
    Json,
}

impl OutputFormat {
    pub(crate) const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ja | OutputFormat::Auto | OutputFormat::Deriv => "txt",
            OutputFormat::Json => "jsonl",
        }
    }
}

impl Cli {
    pub(crate) fn options(&self) -> PipelineOptions {
        PipelineOptions {
            type_raise: !self.no_type_raise,
            rotation_passes: self.rotation_passes,
        }
    }

    pub(crate) fn out_dir(&self) -> PathBuf {
        if let Some(out) = &self.out {
            return out.clone();
        }
        let stem = self
            .path
            .file_stem()
            .map_or_else(|| "rebranched".into(), |s| s.to_string_lossy().into_owned());
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let dir = parent.join(&stem);
        if dir == self.path {
            parent.join(format!("{stem}_rebranched"))
        } else {
            dir
        }
    }
}

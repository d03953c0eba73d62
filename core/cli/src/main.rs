#![warn(clippy::pedantic)]

//! # Rebranch CLI
//!
//! Command line interface for converting Japanese CCG derivations to
//! left-branching form.
//!
//! 1. Read  – parse every derivation line of the input file.
//! 2. Type-raise (unless `--no-type-raise`) – raise NP arguments of verb phrases.
//! 3. Rotate (`--rotation-passes N`) – rebracket towards left-branching form.
//! 4. Write – render every stage, plus statistics with `--stats`.
//!
//! A derivation that cannot be read or rewritten is reported and skipped;
//! the rest of the file is still processed.
//!
//! ## Exit codes
//! * 0 – success, including files where some derivations were skipped.
//! * 1 – the input is missing or unreadable, or an output cannot be written.
//!
//! ## Example
//! ```bash
//! rebranch corpus/test.ccgbank --stats -v
//! ```

mod parser;

use std::{
    fs,
    path::Path,
    process::{self},
};

use anyhow::Context;
use clap::Parser;
use parser::{Cli, OutputFormat};
use rebranch::{
    BatchReport, Derivation, Pipeline, Sentence, Stages, printer, read_derivations, stats,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Entry point for the CLI executable.
///
/// On any fatal failure a diagnostic is printed to stderr and the process
/// exits with code `1`.
fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if !args.path.exists() {
        eprintln!("Error: path not found");
        process::exit(1);
    }
    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let input = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let mut sentences = Vec::new();
    let mut unreadable = 0usize;
    for result in read_derivations(&input) {
        match result {
            Ok(sentence) => sentences.push(sentence),
            Err(e) => {
                warn!(error = %e, "unreadable derivation");
                eprintln!("Skipped: {e}");
                unreadable += 1;
            }
        }
    }
    println!(
        "Read: {} derivations ({unreadable} unreadable) from {}",
        sentences.len(),
        args.path.display()
    );

    let options = args.options();
    let report = Pipeline::new(options).run_batch(&sentences);
    for failure in report.failures() {
        eprintln!("Failed: {}: {}", failure.id, failure.error);
    }
    println!(
        "Processed: {} passed, {} failed",
        report.passed(),
        report.failed()
    );

    let out_dir = args.out_dir();
    write_stages(&out_dir, args.format, options.type_raise, &report)?;
    if args.stats {
        write_stats(&out_dir, options.type_raise, &report)?;
    }
    println!("Output written to: {}", out_dir.display());
    Ok(())
}

type StageTrees<'a> = Vec<(&'a str, &'a Derivation)>;

/// The trees of each enabled stage, named as in the output layout.
fn stages(type_raise: bool, report: &BatchReport) -> Vec<(&'static str, StageTrees<'_>)> {
    fn pick<'a>(
        report: &'a BatchReport,
        select: impl Fn(&'a Stages) -> Option<&'a Derivation>,
    ) -> StageTrees<'a> {
        report
            .sentences
            .iter()
            .filter_map(|s| select(&s.stages).map(|tree| (s.id.as_str(), tree)))
            .collect()
    }

    let mut stages = vec![("right", pick(report, |s| Some(&s.right)))];
    if type_raise {
        stages.push(("typeraised", pick(report, |s| s.type_raised.as_ref())));
    }
    stages.push(("left", pick(report, |s| Some(&s.left))));
    stages
}

fn write_stages(
    out_dir: &Path,
    format: OutputFormat,
    type_raise: bool,
    report: &BatchReport,
) -> anyhow::Result<()> {
    let text_dir = out_dir.join("text");
    fs::create_dir_all(&text_dir)
        .with_context(|| format!("failed to create {}", text_dir.display()))?;

    for (name, trees) in stages(type_raise, report) {
        let mut rendered = String::new();
        for (id, tree) in trees {
            let line = match format {
                OutputFormat::Ja => printer::ja_of(tree),
                OutputFormat::Auto => printer::auto_of(tree),
                OutputFormat::Deriv => format!("ID={id}\n{}", printer::deriv_of(tree)),
                OutputFormat::Json => serde_json::to_string(&Sentence {
                    id: id.to_string(),
                    tree: tree.clone(),
                })?,
            };
            rendered.push_str(&line);
            if !line.ends_with('\n') {
                rendered.push('\n');
            }
        }
        let path = text_dir.join(format!("{name}.{}", format.extension()));
        write(&path, &rendered)?;
    }
    Ok(())
}

fn write_stats(out_dir: &Path, type_raise: bool, report: &BatchReport) -> anyhow::Result<()> {
    let count_dir = out_dir.join("NodeCount");
    fs::create_dir_all(&count_dir)
        .with_context(|| format!("failed to create {}", count_dir.display()))?;

    let stages = stages(type_raise, report);
    let mut combinators = String::new();
    for (name, trees) in &stages {
        let counts: Vec<_> = trees
            .iter()
            .flat_map(|(_, tree)| stats::node_counts(tree))
            .collect();
        write(&count_dir.join(format!("{name}.csv")), &stats::node_counts_csv(&counts))?;

        let frequencies = stats::combinator_counts(trees.iter().map(|(_, tree)| *tree));
        combinators.push_str(&format!("[{name}]\n"));
        combinators.push_str(&stats::render_counts(
            frequencies.iter().map(|(rule, count)| (rule, *count)),
        ));
    }
    write(&out_dir.join("combinators.txt"), &combinators)?;

    let right: Vec<&Derivation> = report.sentences.iter().map(|s| &s.stages.right).collect();

    let mut pairs = String::new();
    for (i, pair) in stats::combinator_pairs(right.iter().copied()).iter().enumerate() {
        pairs.push_str(&format!("{i}: {}, {}\n", pair.top, pair.right));
        pairs.push_str(&printer::deriv_of(&pair.example()));
        pairs.push('\n');
    }
    write(&out_dir.join("pairs.txt"), &pairs)?;

    let verbs = stats::verb_list(right.iter().copied());
    write(
        &out_dir.join("verbs.txt"),
        &stats::render_counts(
            verbs
                .iter()
                .map(|((np, vp), count)| (format!("{np} {vp}"), *count)),
        ),
    )?;

    let mut catalan = String::from("id,words,bracketings\n");
    for sentence in &report.sentences {
        let words = sentence.stages.right.words().len();
        let bound = stats::catalan(words).map_or_else(|| "overflow".to_string(), |n| n.to_string());
        catalan.push_str(&format!("{},{words},{bound}\n", sentence.id));
    }
    write(&out_dir.join("catalan.csv"), &catalan)?;
    Ok(())
}

fn write(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "written");
    Ok(())
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use calluna::{Engine, Lexicon, ReferenceTable, corpus, merge};

/// Calluna - article metrics and report CLI
#[derive(Parser)]
#[command(name = "calluna", version, about)]
struct Cli {
    /// Directory of plain-text articles (.txt).
    #[arg(long)]
    articles_dir: PathBuf,

    /// Directory of supplementary stop-word list files.
    #[arg(long)]
    stop_words_dir: PathBuf,

    /// Positive word dictionary file.
    #[arg(long)]
    positive_words: PathBuf,

    /// Negative word dictionary file.
    #[arg(long)]
    negative_words: PathBuf,

    /// Reference table CSV with URL_ID and URL columns.
    #[arg(long)]
    input: PathBuf,

    /// Output report CSV path.
    #[arg(long)]
    output: PathBuf,

    /// Stdout format for the run result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One-line run summary.
    Summary,
    /// Computed records as JSON, keyed by URL_ID.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = Lexicon::builder()
        .stop_words_dir(&cli.stop_words_dir)
        .positive_words(&cli.positive_words)
        .negative_words(&cli.negative_words)
        .build()
        .context("Failed to build lexicon")?;

    let articles =
        corpus::read_dir(&cli.articles_dir).context("Failed to read article directory")?;

    let engine = Engine::new(lexicon);
    let records = engine.process(&articles);

    let reference = ReferenceTable::read(&cli.input).context("Failed to read reference table")?;
    let report = merge(&reference, &records);
    report.write(&cli.output).context("Failed to write report")?;

    match cli.format {
        OutputFormat::Summary => {
            println!(
                "Report written to {} ({} row(s), {} article(s) analyzed).",
                cli.output.display(),
                report.len(),
                records.len()
            );
        }
        OutputFormat::Json => {
            // BTreeMap keeps the JSON output in stable id order.
            let ordered: BTreeMap<_, _> = records.iter().collect();
            println!("{}", serde_json::to_string_pretty(&ordered)?);
        }
    }

    Ok(())
}

//! Command-line front end for kugiri phrase segmentation
//!
//! Loads a model description JSON, reads text from a file or stdin, and
//! prints each line split into phrase-sized segments.

use anyhow::{Context, Result};
use clap::Parser;
use kugiri_core::Segmenter;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kugiri",
    version,
    about = "Segment Japanese or Chinese text into phrase-sized chunks"
)]
struct Args {
    /// Model description JSON file
    #[arg(short, long, value_name = "FILE")]
    model: PathBuf,

    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Separator printed between segments in text output
    #[arg(short, long, default_value = "|")]
    delimiter: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Lines with a delimiter between segments
    Text,
    /// JSON array with one entry per input line
    Json,
}

#[derive(Debug, Serialize)]
struct SegmentedLine<'a> {
    line: usize,
    segments: Vec<&'a str>,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    init_logging(args.verbose);

    let model_bytes = std::fs::read(&args.model)
        .with_context(|| format!("failed to read model file {}", args.model.display()))?;
    let segmenter = Segmenter::from_json(&model_bytes)
        .with_context(|| format!("failed to load model {}", args.model.display()))?;
    log::info!(
        "loaded model {} (total weight {})",
        args.model.display(),
        segmenter.model().total_weight()
    );

    let text = read_input(args.input.as_ref())?;
    let segmented: Vec<SegmentedLine> = text
        .lines()
        .enumerate()
        .map(|(index, line)| SegmentedLine {
            line: index + 1,
            segments: segmenter.segment_str(line),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for line in &segmented {
                println!("{}", line.segments.join(&args.delimiter));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&segmented)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::fs;
use std::path::PathBuf;
use text_extractor::logger::init_logger;
use text_extractor::stats::build_stats_json;
use text_extractor::{classify, ExtractOptions, Extractor};

/// Extract validated, masked records from free-form text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the text file to extract from
    #[arg(index = 1, default_value = "samples/input.txt")]
    file_path: PathBuf,

    /// Output JSON file path
    #[arg(short, long, default_value = "samples/output.json")]
    output: PathBuf,

    /// Extract only specific categories (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Exclude specific categories (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Run category lanes on the thread pool
    #[arg(short, long)]
    parallel: bool,

    /// Print per-category statistics instead of the records
    #[arg(short, long)]
    stats: bool,

    /// Classify a single value and exit
    #[arg(long, value_name = "VALUE")]
    classify: Option<String>,

    /// Suppress all logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.verbose {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    init_logger(level);

    if let Some(value) = &args.classify {
        let categories: Vec<&str> = classify(value).into_iter().map(|lane| lane.name()).collect();
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    let options = ExtractOptions::from_filters(args.categories.as_deref(), args.exclude.as_deref())
        .context("Invalid category filter")?;
    let extractor = Extractor::with_options(options);

    let text = fs::read_to_string(&args.file_path)
        .with_context(|| format!("Failed to read {}", args.file_path.display()))?;
    info!("Processing file: {}", args.file_path.display());

    let result = if args.parallel {
        extractor.extract_parallel(&text)
    } else {
        extractor.extract(&text)
    };
    let json_output = result.to_json_pretty()?;

    if args.stats {
        let source = args.file_path.to_string_lossy();
        let stats = build_stats_json(&result, text.lines().count(), &source);
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", json_output);
    }

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&args.output, json_output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!("Results written to {}", args.output.display());

    Ok(())
}

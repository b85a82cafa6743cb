// src/main.rs

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use changes::corpus::{collect_pieces, default_jobs, file_stem, load_piece, scan_corpus, ScanConfig};
use changes::corpus::report;
use changes_core::{compile_pattern, SixNineStyle, TokenBuilder};

#[derive(Debug, Parser)]
#[command(name = "changes")]
#[command(about = "Scan harmonic analyses for chord-progression patterns")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan pieces for progression patterns
    Scan(ScanArgs),
    /// Print each piece as a bar-by-bar token chart
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
struct ScanArgs {
    /// Piece file, or directory to walk for piece files
    path: PathBuf,

    /// Pattern to search for, e.g. "ii* V7* Imaj7" (repeatable)
    #[arg(short, long = "pattern", required = true)]
    pattern: Vec<String>,

    /// Report every file and pattern, hits or none
    #[arg(short, long)]
    verbose: bool,

    /// Write hits to a CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show the source chord literals alongside hit tokens
    #[arg(long)]
    show_literals: bool,

    /// Spelling of six-nine tokens: 69 or 6/9
    #[arg(long, default_value = "69")]
    six_nine_style: SixNineStyle,

    /// Worker threads (default: available cores minus one)
    #[arg(long)]
    jobs: Option<usize>,
}

#[derive(Debug, Args)]
struct ChartArgs {
    /// Piece file, or directory to walk for piece files
    path: PathBuf,

    /// Spelling of six-nine tokens: 69 or 6/9
    #[arg(long, default_value = "69")]
    six_nine_style: SixNineStyle,
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Scan(args) => run_scan(args),
        Command::Chart(args) => run_chart(args),
    }
}

fn run_scan(args: ScanArgs) -> Result<()> {
    let paths = collect_pieces(&args.path)?;
    if paths.is_empty() {
        bail!("No piece files found under {}", args.path.display());
    }

    // every pattern must compile before any file is read
    let mut patterns = Vec::new();
    for text in &args.pattern {
        patterns.push((text.clone(), compile_pattern(text)?));
    }

    let config = ScanConfig {
        patterns,
        six_nine: args.six_nine_style,
        jobs: args.jobs.unwrap_or_else(default_jobs).max(1),
    };
    let outcomes = scan_corpus(&paths, &config)?;

    for outcome in &outcomes {
        report::print_piece(outcome, &config.patterns, args.verbose, args.show_literals);
    }
    if let Some(path) = &args.output {
        report::write_csv(path, &outcomes, &config.patterns, args.show_literals)?;
    }
    report::print_summary(&outcomes);
    Ok(())
}

fn run_chart(args: ChartArgs) -> Result<()> {
    let paths = collect_pieces(&args.path)?;
    if paths.is_empty() {
        bail!("No piece files found under {}", args.path.display());
    }
    let builder = TokenBuilder::new(args.six_nine_style);
    let banners = args.path.is_dir();
    for path in &paths {
        if banners {
            println!("=== {} ===", file_stem(path));
        }
        match load_piece(path) {
            Ok(piece) => report::print_chart(piece, &builder),
            Err(error) => eprintln!("{} {}: ERROR ({:#})", "×".red(), file_stem(path), error),
        }
    }
    Ok(())
}

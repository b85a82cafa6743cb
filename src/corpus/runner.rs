// src/corpus/runner.rs

//! Parallel per-piece scanning.
//!
//! Pieces are independent, so the corpus is an embarrassingly parallel
//! batch: one worker per file on a dedicated pool, results collected in
//! file-enumeration order so output stays deterministic under any
//! scheduling.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use changes_core::{scan, token_sequence, Key, MatchHit, PatternToken, SixNineStyle, TokenBuilder};

use crate::corpus::piece::load_piece;

/// Corpus-wide scan settings.
pub struct ScanConfig {
    /// Compiled patterns paired with the text they were compiled from
    pub patterns: Vec<(String, Vec<PatternToken>)>,
    pub six_nine: SixNineStyle,
    pub jobs: usize,
}

/// Hits for one loaded piece, one list per configured pattern.
#[derive(Debug)]
pub struct PieceScan {
    pub title: String,
    pub key: Key,
    pub per_pattern: Vec<Vec<MatchHit>>,
}

/// Outcome for one enumerated path; load failures are carried, not fatal.
#[derive(Debug)]
pub struct PieceOutcome {
    pub path: PathBuf,
    pub result: Result<PieceScan>,
}

/// Scan every file with every pattern.
pub fn scan_corpus(paths: &[PathBuf], config: &ScanConfig) -> Result<Vec<PieceOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .context("building the scan thread pool")?;
    let builder = TokenBuilder::new(config.six_nine);
    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| PieceOutcome {
                path: path.clone(),
                result: scan_piece(path, &builder, &config.patterns),
            })
            .collect()
    }))
}

fn scan_piece(
    path: &Path,
    builder: &TokenBuilder,
    patterns: &[(String, Vec<PatternToken>)],
) -> Result<PieceScan> {
    let piece = load_piece(path)?;
    let sequence = token_sequence(piece.events, builder);
    let per_pattern = patterns
        .iter()
        .map(|(_, pattern)| scan(&sequence, pattern))
        .collect();
    Ok(PieceScan {
        title: piece.title,
        key: piece.key,
        per_pattern,
    })
}

/// One worker per core, minus one for the rest of the process.
pub fn default_jobs() -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    std::cmp::max(1, cores.saturating_sub(1))
}

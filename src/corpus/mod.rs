// src/corpus/mod.rs

//! Corpus driving: piece files, enumeration, parallel scanning, reporting.

pub mod piece;
pub mod report;
pub mod runner;
pub mod walk;

pub use piece::{file_stem, load_piece, Piece};
pub use runner::{default_jobs, scan_corpus, PieceOutcome, PieceScan, ScanConfig};
pub use walk::collect_pieces;

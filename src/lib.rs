//! # Changes
//!
//! Changes scans corpora of harmonically analyzed pieces for
//! chord-progression patterns. Each piece arrives as an ordered list of
//! chord events (bar, offset, chord literal, Roman-numeral figure); the
//! core library turns those into canonical harmonic tokens and matches
//! them against progression patterns such as `ii* V7* Imaj7`.
//!
//! This crate is the corpus driver around `changes_core`: file
//! enumeration, parallel scanning, and console/CSV reporting. The
//! `changes` binary exposes it as `scan` and `chart` subcommands.
//!
//! ## Modules
//!
//! - `corpus`: Piece interchange files, directory walking, the rayon
//!   scan runner, and the console/CSV reporters.

pub mod corpus;

// Re-export commonly used types and functions for convenience
pub use changes_core::{compile_pattern, scan, token_sequence, SixNineStyle, TokenBuilder};
pub use corpus::{collect_pieces, load_piece, scan_corpus, ScanConfig};

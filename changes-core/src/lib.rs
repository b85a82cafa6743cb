//! # Changes Core
//!
//! Core library for harmonic-pattern scanning. Turns the chord labels and
//! Roman-numeral figures of an analyzed piece into canonical tokens, and
//! matches token sequences against small progression patterns.
//!
//! ## Features
//!
//! - **serde**: Enable serialization of the interchange types
//!
//! ## Example
//!
//! ```ignore
//! use changes_core::{compile_pattern, scan, token_sequence, TokenBuilder};
//!
//! let builder = TokenBuilder::default();
//! let sequence = token_sequence(events, &builder);
//! let pattern = compile_pattern("ii-7 V7 Imaj7")?;
//! for hit in scan(&sequence, &pattern) {
//!     println!("bar {}", hit.start_bar);
//! }
//! ```

pub mod analyze;
pub mod pattern;
pub mod types;

// Re-export commonly used types
pub use analyze::{
    canonicalize, classify, normalize_literal, token_sequence, SequenceEntry, SixNineStyle,
    TokenBuilder,
};
pub use pattern::{
    compile_pattern, scan, Family, MatchHit, PatternError, PatternSuffix, PatternToken,
};
pub use types::{Accidental, ChordEvent, DegreeHead, Key, Mode, Offset, Quality, ScaleDegree, Token};

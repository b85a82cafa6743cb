// changes-core/src/analyze/mod.rs

//! Turns raw chord labels and Roman-numeral figures into canonical tokens.
//!
//! The path for one event is: normalize the chord literal, classify its
//! quality from the literal (falling back to the raw figure), then spell
//! the token from degree head + quality. Nothing on this path fails: input
//! the classifier cannot place degrades to an unresolved or raw token.

mod builder;
mod classify;
mod literal;
mod pipeline;

pub use builder::{SixNineStyle, TokenBuilder};
pub use classify::classify;
pub use literal::normalize_literal;
pub use pipeline::{canonicalize, token_sequence, SequenceEntry};

// changes-core/src/pattern/mod.rs

//! Progression patterns: compilation, family matching, sequence scanning.

mod compiler;
mod error;
mod family;
mod scanner;

#[cfg(test)]
mod matcher_tests;

pub use compiler::{compile_pattern, PatternSuffix, PatternToken};
pub use error::PatternError;
pub use family::{matches_token, Family};
pub use scanner::{scan, MatchHit};

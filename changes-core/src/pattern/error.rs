// changes-core/src/pattern/error.rs

use std::fmt;

/// A pattern specification that failed to compile, carrying the offending
/// space-separated token.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternError {
    pub message: String,
    pub token: String,
}

impl PatternError {
    pub fn new(message: String, token: String) -> Self {
        Self { message, token }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern error: {}: '{}'", self.message, self.token)
    }
}

impl std::error::Error for PatternError {}

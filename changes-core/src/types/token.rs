// changes-core/src/types/token.rs
use super::degree::DegreeHead;
use std::fmt;

/// A canonical Roman-numeral token, e.g. `V7(b9)` or `ii-7`.
///
/// Most tokens are a degree head plus suffix, but an unresolvable figure
/// passes through as raw text and a missing figure leaves the token empty,
/// so the inner value is plain text rather than structured parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty tokens hold a sequence position but match nothing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into degree head and suffix when the token starts with a
    /// well-formed head. Raw pass-through tokens return None.
    pub fn parts(&self) -> Option<(DegreeHead, &str)> {
        DegreeHead::parse_prefix(&self.0).map(|(head, used)| (head, &self.0[used..]))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_string())
    }
}

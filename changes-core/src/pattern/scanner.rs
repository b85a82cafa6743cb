// changes-core/src/pattern/scanner.rs

use crate::analyze::SequenceEntry;
use crate::pattern::compiler::PatternToken;
use crate::pattern::family::matches_token;
use crate::types::Token;

/// One window of a token sequence that matched a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchHit {
    /// Bar number of the window's first chord
    pub start_bar: u32,
    pub tokens: Vec<Token>,
    pub literals: Vec<String>,
}

/// Slide the pattern over the sequence and report every matching window.
///
/// Windows are contiguous: no gaps, no reordering, and an empty token in
/// the window fails it. Overlapping hits are all reported, in sequence
/// order, one per matching start position.
pub fn scan(sequence: &[SequenceEntry], pattern: &[PatternToken]) -> Vec<MatchHit> {
    if pattern.is_empty() || sequence.len() < pattern.len() {
        return Vec::new();
    }
    let mut hits = Vec::new();
    for window in sequence.windows(pattern.len()) {
        let matched = window
            .iter()
            .zip(pattern)
            .all(|(entry, element)| matches_token(element, &entry.token));
        if matched {
            hits.push(MatchHit {
                start_bar: window[0].bar,
                tokens: window.iter().map(|entry| entry.token.clone()).collect(),
                literals: window.iter().map(|entry| entry.literal.clone()).collect(),
            });
        }
    }
    hits
}

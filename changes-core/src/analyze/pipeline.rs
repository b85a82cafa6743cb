// changes-core/src/analyze/pipeline.rs

use crate::analyze::builder::TokenBuilder;
use crate::analyze::classify::classify;
use crate::analyze::literal::normalize_literal;
use crate::types::{ChordEvent, DegreeHead, Token};

/// One slot of a tokenized piece: the canonical token plus the cleaned-up
/// literal it was built from, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEntry {
    pub bar: u32,
    pub token: Token,
    pub literal: String,
}

fn canonical_parts(
    raw_literal: &str,
    raw_degree: &str,
    raw_quality: &str,
    builder: &TokenBuilder,
) -> (String, Token) {
    let literal = normalize_literal(raw_literal);
    let lowercase = DegreeHead::parse(raw_degree).map_or(false, |head| head.lowercase);
    let quality = classify(&literal, raw_quality, lowercase);
    let token = builder.build(raw_degree, raw_quality, quality, &literal);
    (literal, token)
}

/// Canonical token for one event's literal, degree and figure.
pub fn canonicalize(
    raw_literal: &str,
    raw_degree: &str,
    raw_quality: &str,
    builder: &TokenBuilder,
) -> Token {
    canonical_parts(raw_literal, raw_degree, raw_quality, builder).1
}

/// Tokenize a whole piece.
///
/// Events are ordered by bar, then by offset within the bar; events at the
/// same position keep the order they arrived in. Every event produces an
/// entry, so a degraded label still occupies its slot in the sequence.
pub fn token_sequence(mut events: Vec<ChordEvent>, builder: &TokenBuilder) -> Vec<SequenceEntry> {
    events.sort_by_key(ChordEvent::position);
    events
        .into_iter()
        .map(|event| {
            let (literal, token) =
                canonical_parts(&event.literal, &event.degree, &event.quality, builder);
            SequenceEntry { bar: event.bar, token, literal }
        })
        .collect()
}

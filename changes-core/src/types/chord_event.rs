// changes-core/src/types/chord_event.rs
use super::offset::Offset;

/// One analyzed chord from an upstream harmonic analysis.
///
/// `literal` is the label as written in the source; `degree` and `quality`
/// are the Roman-numeral head and raw figure tail the analysis assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordEvent {
    /// 1-based bar number (0 when the source had none)
    pub bar: u32,
    /// Position within the bar, as a fraction of a whole note
    pub offset: Offset,
    /// Chord label as written, e.g. "Bb7(b9)"
    pub literal: String,
    /// Degree head, e.g. "bVII" or "ii"
    pub degree: String,
    /// Raw quality/figure tail, e.g. "65" or "maj7"
    pub quality: String,
}

impl ChordEvent {
    /// Sort key: bar first, exact offset within the bar second
    pub fn position(&self) -> (u32, Offset) {
        (self.bar, self.offset)
    }
}

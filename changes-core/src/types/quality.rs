// changes-core/src/types/quality.rs

/// Harmonic quality assigned to one chord event.
///
/// The vocabulary is deliberately small: qualities map one-to-one onto the
/// canonical token suffixes, and anything the classifier cannot place lands
/// on `Unresolved` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    MajorPlain,      // I
    MajorSix,        // I6
    MajorMaj7,       // Imaj7
    MajorSixNine,    // I69 or I6/9
    Dominant7,       // V7
    MinorTriad,      // i
    MinorSix,        // i-6
    MinorSeven,      // i-7
    MinorMaj7,       // imaj7
    Diminished7,     // viio7
    HalfDiminished7, // viiø7
    Unresolved,      // neither literal nor figure settles it
}

impl Quality {
    /// Qualities spelled with a lowercase degree head
    pub fn is_minor_family(&self) -> bool {
        matches!(
            self,
            Quality::MinorTriad
                | Quality::MinorSix
                | Quality::MinorSeven
                | Quality::MinorMaj7
                | Quality::Diminished7
                | Quality::HalfDiminished7
        )
    }

    /// Dominants are spelled uppercase no matter how the figure was written
    pub fn forces_uppercase(&self) -> bool {
        matches!(self, Quality::Dominant7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_rules_do_not_overlap() {
        let all = [
            Quality::MajorPlain,
            Quality::MajorSix,
            Quality::MajorMaj7,
            Quality::MajorSixNine,
            Quality::Dominant7,
            Quality::MinorTriad,
            Quality::MinorSix,
            Quality::MinorSeven,
            Quality::MinorMaj7,
            Quality::Diminished7,
            Quality::HalfDiminished7,
            Quality::Unresolved,
        ];
        for q in all {
            assert!(!(q.is_minor_family() && q.forces_uppercase()), "{:?}", q);
        }
    }
}

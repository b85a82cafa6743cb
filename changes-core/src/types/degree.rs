// changes-core/src/types/degree.rs
use std::fmt;

/// Accidental prefix of a degree head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accidental {
    Flat,  // b
    Sharp, // #
}

impl Accidental {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::Flat => "b",
            Accidental::Sharp => "#",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Accidental::Flat),
            '#' => Some(Accidental::Sharp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleDegree {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

/// Spellings ordered longest-first so "III" never reads as "II" + leftover.
const NUMERALS: &[(&str, &str, ScaleDegree)] = &[
    ("VII", "vii", ScaleDegree::VII),
    ("III", "iii", ScaleDegree::III),
    ("VI", "vi", ScaleDegree::VI),
    ("IV", "iv", ScaleDegree::IV),
    ("II", "ii", ScaleDegree::II),
    ("V", "v", ScaleDegree::V),
    ("I", "i", ScaleDegree::I),
];

impl ScaleDegree {
    pub fn upper(&self) -> &'static str {
        match self {
            ScaleDegree::I => "I",
            ScaleDegree::II => "II",
            ScaleDegree::III => "III",
            ScaleDegree::IV => "IV",
            ScaleDegree::V => "V",
            ScaleDegree::VI => "VI",
            ScaleDegree::VII => "VII",
        }
    }

    pub fn lower(&self) -> &'static str {
        match self {
            ScaleDegree::I => "i",
            ScaleDegree::II => "ii",
            ScaleDegree::III => "iii",
            ScaleDegree::IV => "iv",
            ScaleDegree::V => "v",
            ScaleDegree::VI => "vi",
            ScaleDegree::VII => "vii",
        }
    }
}

/// Head of a Roman-numeral figure: optional accidental, numeral, written case.
///
/// `bVII` and `#iv` carry an accidental; the numeral itself must be spelled
/// in a single case, so `Iv` is not a valid head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeHead {
    pub accidental: Option<Accidental>,
    pub degree: ScaleDegree,
    pub lowercase: bool,
}

impl DegreeHead {
    /// Parse a head from the start of `s`, returning the bytes consumed.
    /// Longest numeral wins, so "vii" is VII rather than VI + leftover "i".
    pub fn parse_prefix(s: &str) -> Option<(DegreeHead, usize)> {
        let mut used = 0;
        let accidental = s.chars().next().and_then(Accidental::from_char);
        if accidental.is_some() {
            used += 1; // 'b' and '#' are single bytes
        }
        let rest = &s[used..];
        for (upper, lower, degree) in NUMERALS {
            if rest.starts_with(upper) {
                let head = DegreeHead {
                    accidental,
                    degree: *degree,
                    lowercase: false,
                };
                return Some((head, used + upper.len()));
            }
            if rest.starts_with(lower) {
                let head = DegreeHead {
                    accidental,
                    degree: *degree,
                    lowercase: true,
                };
                return Some((head, used + lower.len()));
            }
        }
        None
    }

    /// Parse a complete head; trailing characters make it invalid.
    pub fn parse(s: &str) -> Option<DegreeHead> {
        match Self::parse_prefix(s) {
            Some((head, used)) if used == s.len() => Some(head),
            _ => None,
        }
    }

    /// Spelling with the case forced one way or the other
    pub fn spelled(&self, lowercase: bool) -> String {
        let numeral = if lowercase {
            self.degree.lower()
        } else {
            self.degree.upper()
        };
        match self.accidental {
            Some(acc) => format!("{}{}", acc.as_str(), numeral),
            None => numeral.to_string(),
        }
    }

    /// Spelling in the head's own case
    pub fn text(&self) -> String {
        self.spelled(self.lowercase)
    }
}

impl fmt::Display for DegreeHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

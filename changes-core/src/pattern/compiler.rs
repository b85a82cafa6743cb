// changes-core/src/pattern/compiler.rs

//! Pattern text to compiled elements.

use crate::pattern::error::PatternError;
use crate::pattern::family::Family;
use crate::types::DegreeHead;

/// Exact quality suffixes a pattern element may spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSuffix {
    Maj7,
    HalfDim7,
    Dim7,
    SixNine,
    Minor7,
    Minor6,
    Dominant7,
    Six,
}

/// Spellings ordered longest-first so "maj7" is never read as a bare "7"
/// and "6/9" is never read as "6". "69" is an accepted alias.
const SUFFIXES: &[(&str, PatternSuffix)] = &[
    ("maj7", PatternSuffix::Maj7),
    ("ø7", PatternSuffix::HalfDim7),
    ("o7", PatternSuffix::Dim7),
    ("6/9", PatternSuffix::SixNine),
    ("69", PatternSuffix::SixNine),
    ("-7", PatternSuffix::Minor7),
    ("-6", PatternSuffix::Minor6),
    ("7", PatternSuffix::Dominant7),
    ("6", PatternSuffix::Six),
];

impl PatternSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternSuffix::Maj7 => "maj7",
            PatternSuffix::HalfDim7 => "ø7",
            PatternSuffix::Dim7 => "o7",
            PatternSuffix::SixNine => "6/9",
            PatternSuffix::Minor7 => "-7",
            PatternSuffix::Minor6 => "-6",
            PatternSuffix::Dominant7 => "7",
            PatternSuffix::Six => "6",
        }
    }

    fn parse_prefix(s: &str) -> Option<(PatternSuffix, usize)> {
        SUFFIXES
            .iter()
            .find(|(spelling, _)| s.starts_with(spelling))
            .map(|(spelling, suffix)| (*suffix, spelling.len()))
    }
}

/// One compiled pattern element.
///
/// `family` is present exactly when `wildcard` is set; it is derived from
/// the head's case and the suffix at compile time so the scanner never has
/// to re-interpret the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternToken {
    pub head: DegreeHead,
    pub suffix: Option<PatternSuffix>,
    pub wildcard: bool,
    pub family: Option<Family>,
}

impl PatternToken {
    /// Spelling of the element without its wildcard marker
    pub fn text(&self) -> String {
        let mut text = self.head.text();
        if let Some(suffix) = self.suffix {
            text.push_str(suffix.as_str());
        }
        text
    }
}

/// Compile a whitespace-separated pattern specification.
///
/// Each element is an optional accidental, a Roman numeral, an optional
/// exact suffix, and an optional trailing `*` marking a family wildcard.
/// The first malformed element fails the whole pattern.
pub fn compile_pattern(text: &str) -> Result<Vec<PatternToken>, PatternError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(PatternError::new(
            "pattern contains no tokens".to_string(),
            text.to_string(),
        ));
    }
    words.into_iter().map(compile_token).collect()
}

fn compile_token(word: &str) -> Result<PatternToken, PatternError> {
    let fail = |message: &str| PatternError::new(message.to_string(), word.to_string());

    let Some((head, used)) = DegreeHead::parse_prefix(word) else {
        return Err(fail("expected an accidental and Roman numeral"));
    };
    let mut rest = &word[used..];

    let suffix = match PatternSuffix::parse_prefix(rest) {
        Some((suffix, len)) => {
            rest = &rest[len..];
            Some(suffix)
        }
        None => None,
    };

    let wildcard = match rest.strip_suffix('*') {
        Some(stripped) => {
            rest = stripped;
            true
        }
        None => false,
    };
    if !rest.is_empty() {
        return Err(fail("unrecognized quality suffix"));
    }

    let family = if wildcard {
        match Family::for_wildcard(head.lowercase, suffix) {
            Some(family) => Some(family),
            None => return Err(fail("suffix cannot head a family wildcard")),
        }
    } else {
        None
    };

    Ok(PatternToken {
        head,
        suffix,
        wildcard,
        family,
    })
}

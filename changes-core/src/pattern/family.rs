// changes-core/src/pattern/family.rs

//! Family-wildcard semantics.
//!
//! A wildcard element like `ii*` or `V7*` accepts any candidate whose head
//! matches exactly and whose suffix places it in the element's family. The
//! candidate's family is read off its canonical text, tensions aside.

use crate::pattern::compiler::{PatternSuffix, PatternToken};
use crate::types::Token;

/// Harmonic family a wildcard element selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    Major,
    Minor,
    Dominant,
}

impl Family {
    /// Family denoted by a wildcard element's case and suffix. Combinations
    /// outside this table cannot be wildcards.
    pub(crate) fn for_wildcard(lowercase: bool, suffix: Option<PatternSuffix>) -> Option<Family> {
        use PatternSuffix::*;
        match (lowercase, suffix) {
            (false, None | Some(Six) | Some(Maj7) | Some(SixNine)) => Some(Family::Major),
            (false, Some(Dominant7)) => Some(Family::Dominant),
            (true, None | Some(Minor6) | Some(Minor7) | Some(Maj7)) => Some(Family::Minor),
            _ => None,
        }
    }

    /// Family of a canonical token, if its suffix places it in one.
    ///
    /// An uppercase head with a 9/11/13 extension counts as dominant even
    /// though no explicit 7 survived tokenization.
    pub fn of_token(token: &Token) -> Option<Family> {
        let (head, suffix) = token.parts()?;
        let suffix = strip_tension_group(suffix);
        if head.lowercase {
            return match suffix {
                "" | "-6" | "-7" | "maj7" => Some(Family::Minor),
                _ => None,
            };
        }
        match suffix {
            "" | "6" | "maj7" | "69" | "6/9" => Some(Family::Major),
            _ if is_dominant_suffix(suffix) => Some(Family::Dominant),
            _ => None,
        }
    }
}

/// Drop one trailing parenthesized tension group, if present.
fn strip_tension_group(suffix: &str) -> &str {
    match (suffix.find('('), suffix.ends_with(')')) {
        (Some(open), true) => &suffix[..open],
        _ => suffix,
    }
}

fn is_dominant_suffix(suffix: &str) -> bool {
    if suffix.starts_with('9') || suffix.starts_with("11") || suffix.starts_with("13") {
        return true;
    }
    suffix.contains('7') && !suffix.contains("maj") && !suffix.contains('ø') && !suffix.contains('o')
}

/// Element-wise test of one candidate against one pattern element.
///
/// Head accidental, numeral and case must agree either way. Wildcards then
/// compare families; exact elements compare the full text with the two
/// six-nine spellings folded together.
pub fn matches_token(pattern: &PatternToken, candidate: &Token) -> bool {
    if pattern.wildcard {
        let Some((head, _)) = candidate.parts() else {
            return false;
        };
        return head == pattern.head && Family::of_token(candidate) == pattern.family;
    }
    fold_six_nine(&pattern.text()) == fold_six_nine(candidate.as_str())
}

fn fold_six_nine(text: &str) -> String {
    text.replace("6/9", "69")
}

// changes-core/src/analyze/builder.rs

use std::fmt;
use std::str::FromStr;

use crate::analyze::classify::normalize_figure;
use crate::types::{DegreeHead, Quality, Token};

/// How a major six-nine quality is spelled in tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SixNineStyle {
    /// "I69"
    #[default]
    Compact,
    /// "I6/9"
    Slash,
}

impl SixNineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SixNineStyle::Compact => "69",
            SixNineStyle::Slash => "6/9",
        }
    }
}

impl fmt::Display for SixNineStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SixNineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "69" => Ok(SixNineStyle::Compact),
            "6/9" => Ok(SixNineStyle::Slash),
            other => Err(format!("six-nine style must be 69 or 6/9, got '{}'", other)),
        }
    }
}

/// Builds canonical tokens from a classified event.
///
/// Spelling is `[accidental]DEGREE[suffix][(tensions)]`. The quality fixes
/// both the suffix and the degree case; flat-nine and sharp-nine tensions
/// carry over from the literal in a trailing parenthesis group.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenBuilder {
    pub six_nine: SixNineStyle,
}

impl TokenBuilder {
    pub fn new(six_nine: SixNineStyle) -> TokenBuilder {
        TokenBuilder { six_nine }
    }

    /// Spell the token for one event.
    ///
    /// A degree that does not parse as a Roman numeral is passed through
    /// as-is; it keeps its slot in the sequence but never matches.
    pub fn build(&self, raw_degree: &str, raw_quality: &str, quality: Quality, literal: &str) -> Token {
        let Some(head) = DegreeHead::parse(raw_degree) else {
            return Token::new(raw_degree);
        };

        let lowercase = if quality.forces_uppercase() {
            false
        } else if quality.is_minor_family() {
            true
        } else {
            head.lowercase
        };

        let mut text = head.spelled(lowercase);
        match quality {
            Quality::MajorPlain | Quality::MinorTriad => {}
            Quality::MajorSix => text.push('6'),
            Quality::MajorMaj7 | Quality::MinorMaj7 => text.push_str("maj7"),
            Quality::MajorSixNine => text.push_str(self.six_nine.as_str()),
            Quality::Dominant7 => text.push('7'),
            Quality::MinorSix => text.push_str("-6"),
            Quality::MinorSeven => text.push_str("-7"),
            Quality::Diminished7 => text.push_str("o7"),
            Quality::HalfDiminished7 => text.push_str("ø7"),
            Quality::Unresolved => text.push_str(&normalize_figure(raw_quality)),
        }
        text.push_str(&tension_suffix(literal));
        Token::new(text)
    }
}

/// Altered-nine tensions found in the normalized literal, rendered as a
/// "(b9)", "(#9)" or "(b9,#9)" tail. Anything else stays out of the token.
fn tension_suffix(literal: &str) -> String {
    let chars: Vec<char> = literal.to_lowercase().chars().collect();
    let mut flat = false;
    let mut sharp = false;
    for (i, &c) in chars.iter().enumerate() {
        if (c != 'b' && c != '#') || chars.get(i + 1) != Some(&'9') {
            continue;
        }
        // a real alteration sits after a chord member, never at a word start
        let preceded = i > 0 && {
            let prev = chars[i - 1];
            prev.is_ascii_digit() || prev.is_whitespace() || matches!(prev, '(' | ')' | ',' | '/')
        };
        if preceded {
            if c == 'b' {
                flat = true;
            } else {
                sharp = true;
            }
        }
    }
    match (flat, sharp) {
        (true, true) => "(b9,#9)".to_string(),
        (true, false) => "(b9)".to_string(),
        (false, true) => "(#9)".to_string(),
        (false, false) => String::new(),
    }
}

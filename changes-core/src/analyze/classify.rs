// changes-core/src/analyze/classify.rs

//! Quality classification.
//!
//! The chord literal is the primary witness: a written "m7b5" or "6/9"
//! outranks whatever the Roman-numeral figure says. Only when the literal
//! is mute does the raw figure tail get a say, and only when both are mute
//! does the event stay unresolved.

use crate::types::Quality;

/// Everything the literal rules look at, computed once per event.
struct LiteralFacts {
    diminished7: bool,
    half_diminished: bool,
    minor_major7: bool,
    major_family: bool,
    minor_six: bool,
    six_nine: bool,
    six_only: bool,
    minor_seven: bool,
    dominant_seven: bool,
    minor_triad: bool,
    minor_marked: bool,
}

impl LiteralFacts {
    fn read(normalized: &str) -> LiteralFacts {
        let lit = normalized.to_lowercase();
        let chars: Vec<char> = lit.chars().collect();

        let major_family = has_major_marker(&chars);
        let six_nine = has_six_nine(&chars);
        LiteralFacts {
            diminished7: lit.contains("dim7") || lit.contains("°7") || lit.contains("o7"),
            half_diminished: lit.contains("m7b5") || lit.contains("ø7"),
            minor_major7: lit.contains("m(maj7)")
                || lit.contains("mmaj7")
                || lit.contains("m^7")
                || lit.contains("mδ"),
            major_family,
            minor_six: starts_root_m6(&chars) || lit.contains("-6"),
            six_nine,
            six_only: !six_nine && (lit.ends_with('6') || lit.contains(" 6")),
            minor_seven: lit.contains("m7") || lit.contains("-7"),
            dominant_seven: has_bare_seven(&chars) || starts_dominant_extension(&chars),
            minor_triad: starts_minor_triad(&chars),
            minor_marked: starts_minor_triad(&chars)
                || (lit.contains("min") && !major_family),
        }
    }
}

type Predicate = fn(&LiteralFacts) -> bool;

/// Literal decision table; the first matching row wins. Order is
/// load-bearing: specific spellings (dim7, m7b5, m(maj7)) outrank the
/// broader checks below them, and each six rule resolves minor before major.
const LITERAL_RULES: &[(Predicate, Quality)] = &[
    (|f| f.diminished7, Quality::Diminished7),
    (|f| f.half_diminished, Quality::HalfDiminished7),
    (|f| f.minor_major7, Quality::MinorMaj7),
    (|f| f.major_family, Quality::MajorMaj7),
    (|f| f.minor_six, Quality::MinorSix),
    (|f| f.six_nine && f.minor_marked, Quality::MinorSix),
    (|f| f.six_nine, Quality::MajorSixNine),
    (|f| f.six_only && f.minor_marked, Quality::MinorSix),
    (|f| f.six_only, Quality::MajorSix),
    (|f| f.minor_seven, Quality::MinorSeven),
    (|f| f.dominant_seven, Quality::Dominant7),
    (|f| f.minor_triad, Quality::MinorTriad),
];

/// Classify one event from its normalized literal, falling back to the raw
/// Roman-numeral figure when the literal settles nothing.
///
/// `degree_is_lowercase` only matters for the fallback's bare-7 reading:
/// "v" + "7" is a minor seventh, "V" + "7" a dominant.
pub fn classify(normalized_literal: &str, raw_quality: &str, degree_is_lowercase: bool) -> Quality {
    let facts = LiteralFacts::read(normalized_literal);
    for (applies, quality) in LITERAL_RULES {
        if applies(&facts) {
            return *quality;
        }
    }
    classify_figure(raw_quality, degree_is_lowercase).unwrap_or(Quality::Unresolved)
}

/// Ordered checks over the normalized figure tail.
fn classify_figure(raw_quality: &str, degree_is_lowercase: bool) -> Option<Quality> {
    let q = normalize_figure(raw_quality);
    if q.contains("maj") {
        return Some(Quality::MajorMaj7);
    }
    if q.contains("ø7") {
        return Some(Quality::HalfDiminished7);
    }
    if (q.contains("o7") || q.contains("°7")) && !q.contains('ø') {
        return Some(Quality::Diminished7);
    }
    if q.contains("6/9") || q.contains("69") {
        return Some(Quality::MajorSixNine);
    }
    if has_bare_six(&q) {
        return Some(Quality::MajorSix);
    }
    if q.contains('7') && !q.contains("o7") && !q.contains("°7") {
        return Some(if degree_is_lowercase {
            Quality::MinorSeven
        } else {
            Quality::Dominant7
        });
    }
    None
}

/// Strip spaces, fold maj7 spelling aliases, and drop inversion figures
/// from a raw figure tail. "Δ7", "^7" and uppercase "M7" all mean maj7;
/// "65"/"43"/... denote voicing, not quality.
pub(crate) fn normalize_figure(tail: &str) -> String {
    let compact: String = tail.chars().filter(|c| !c.is_whitespace()).collect();
    // "M7" folds before lowercasing so a genuine lowercase "m7" survives
    let folded = compact
        .replace("M7", "maj7")
        .to_lowercase()
        .replace("^7", "maj7")
        .replace("δ7", "maj7")
        .replace('δ', "maj7");
    strip_inversion_figures(&folded)
}

const INVERSION_FIGURES: &[&str] = &["65", "64", "63", "62", "54", "53", "43", "42", "32"];

fn strip_inversion_figures(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if let Some(fig) = INVERSION_FIGURES.iter().find(|f| matches_at(&chars, i, f)) {
            i += fig.len();
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// maj / ^ / Δ immediately followed (spaces aside) by 7, 9 or 13
fn has_major_marker(chars: &[char]) -> bool {
    for i in 0..chars.len() {
        let after = if matches_at(chars, i, "maj") {
            i + 3
        } else if chars[i] == '^' || chars[i] == 'δ' {
            i + 1
        } else {
            continue;
        };
        let j = skip_spaces(chars, after);
        if matches_at(chars, j, "13") || matches!(chars.get(j), Some('7') | Some('9')) {
            return true;
        }
    }
    false
}

/// "6/9", "6-9", "6+9", "6add9", "6(9)" with optional spaces, or a plain
/// "69" with no digit on either side (so "169" stays a bar of rest).
fn has_six_nine(chars: &[char]) -> bool {
    for (i, &c) in chars.iter().enumerate() {
        if c != '6' {
            continue;
        }
        if chars.get(i + 1) == Some(&'9')
            && (i == 0 || !chars[i - 1].is_ascii_digit())
            && chars.get(i + 2).map_or(true, |n| !n.is_ascii_digit())
        {
            return true;
        }
        let j = skip_spaces(chars, i + 1);
        let j = match chars.get(j) {
            Some('/') | Some('-') | Some('+') | Some('(') => j + 1,
            Some('a') if matches_at(chars, j, "add") => j + 3,
            _ => continue,
        };
        if chars.get(skip_spaces(chars, j)) == Some(&'9') {
            return true;
        }
    }
    false
}

/// A '7' that is not spelled as part of maj7/m7/ø7/o7/°7, a folded Δ7/^7,
/// or a canonical minor "-7"
fn has_bare_seven(chars: &[char]) -> bool {
    for (i, &c) in chars.iter().enumerate() {
        if c != '7' {
            continue;
        }
        let excluded = i > 0
            && match chars[i - 1] {
                'm' | 'ø' | 'o' | '°' | '^' | 'δ' | '-' => true,
                'j' => i >= 3 && chars[i - 3] == 'm' && chars[i - 2] == 'a',
                _ => false,
            };
        if !excluded {
            return true;
        }
    }
    false
}

/// Leading root followed directly by a 9/11/13 extension ("Bb9", "D13"):
/// dominant even with no written 7.
fn starts_dominant_extension(chars: &[char]) -> bool {
    let Some(n) = root_prefix_len(chars) else {
        return false;
    };
    let ext = if matches_at(chars, n, "13") || matches_at(chars, n, "11") {
        2
    } else if chars.get(n) == Some(&'9') {
        1
    } else {
        return false;
    };
    chars.get(n + ext).map_or(true, |c| !c.is_ascii_digit())
}

fn starts_root_m6(chars: &[char]) -> bool {
    root_prefix_len(chars)
        .map_or(false, |n| chars.get(n) == Some(&'m') && chars.get(n + 1) == Some(&'6'))
}

/// Leading root + "m" with a chord-member boundary after it, so "Am", "Am7"
/// and "Am/C" read as minor but "Amaj7" does not.
fn starts_minor_triad(chars: &[char]) -> bool {
    let Some(n) = root_prefix_len(chars) else {
        return false;
    };
    if chars.get(n) != Some(&'m') {
        return false;
    }
    match chars.get(n + 1) {
        None => true,
        Some(&c) => matches!(c, '/' | '(') || c.is_whitespace() || c.is_ascii_digit(),
    }
}

/// Length of a leading pitch-root spelling ("c", "bb", "f#"), if any.
/// Works on lowercased text.
fn root_prefix_len(chars: &[char]) -> Option<usize> {
    match chars.first() {
        Some(c) if ('a'..='g').contains(c) => {}
        _ => return None,
    }
    match chars.get(1) {
        Some('b') | Some('#') => Some(2),
        _ => Some(1),
    }
}

fn matches_at(chars: &[char], at: usize, word: &str) -> bool {
    word.chars()
        .enumerate()
        .all(|(k, w)| chars.get(at + k) == Some(&w))
}

fn skip_spaces(chars: &[char], mut at: usize) -> usize {
    while chars.get(at).map_or(false, |c| c.is_whitespace()) {
        at += 1;
    }
    at
}

fn has_bare_six(q: &str) -> bool {
    let chars: Vec<char> = q.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        c == '6'
            && (i == 0 || !chars[i - 1].is_ascii_digit())
            && chars.get(i + 1).map_or(true, |n| !matches!(n, '0' | '4' | '9'))
    })
}

// changes-core/src/analyze/literal.rs

//! Chord-label normalization.
//!
//! Upstream analyses write the same chord many ways: "E-7" for Eb7,
//! "add 4 subtract 3" for a suspension, stray double spaces. Everything
//! downstream (classification, tension detection, display) reads the
//! normalized spelling produced here.

/// Normalize a chord label as written in the source.
///
/// - trims surrounding whitespace
/// - respells root-adjacent `-`/`+` as `b`/`#` ("E-7" becomes "Eb7")
/// - folds spelled-out suspensions to `sus4`
/// - collapses whitespace runs to a single space
///
/// Letter case is preserved; classification case-folds on its own.
pub fn normalize_literal(raw: &str) -> String {
    let swapped = swap_root_accidentals(raw.trim());
    let folded = fold_suspensions(&swapped);
    collapse_spaces(&folded)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_pitch_letter(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A'..='G')
}

/// `-`/`+` count as accidentals only right after a word-initial pitch letter
/// and only before a separator or digit, so "E-7" respells but a hyphenated
/// word does not.
fn swap_root_accidentals(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_pitch_letter(c)
            && (i == 0 || !is_word(chars[i - 1]))
            && matches!(chars.get(i + 1), Some('-') | Some('+'))
            && separator_follows(&chars, i + 2)
        {
            out.push(c);
            out.push(if chars[i + 1] == '-' { 'b' } else { '#' });
            i += 2;
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

fn separator_follows(chars: &[char], at: usize) -> bool {
    match chars.get(at) {
        None => true,
        Some(&c) => matches!(c, '/' | '(') || c.is_whitespace() || c.is_ascii_digit(),
    }
}

/// Rewrite suspension phrases to `sus4`, then collapse stacked repeats
/// ("sus4 sus4") left over from redundant source spellings.
fn fold_suspensions(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut rewritten: Vec<char> = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if i == 0 || !is_word(chars[i - 1]) {
            if let Some(len) = match_sus_phrase(&chars[i..]) {
                rewritten.extend("sus4".chars());
                i += len;
                continue;
            }
        }
        rewritten.push(chars[i]);
        i += 1;
    }

    let mut out = String::with_capacity(rewritten.len());
    let mut i = 0;
    while i < rewritten.len() {
        if (i == 0 || !is_word(rewritten[i - 1])) && starts_sus4(&rewritten, i) {
            out.push_str("sus4");
            i += 4;
            loop {
                let mut j = i;
                while j < rewritten.len() && rewritten[j].is_whitespace() {
                    j += 1;
                }
                if j > i && starts_sus4(&rewritten, j) {
                    i = j + 4;
                } else {
                    break;
                }
            }
            continue;
        }
        out.push(rewritten[i]);
        i += 1;
    }
    out
}

fn starts_sus4(chars: &[char], at: usize) -> bool {
    matches_at(chars, at, "sus4") && boundary_after(chars, at + 4)
}

/// "sus 4" or an add-4/add-11 phrase that removes the third, matched at a
/// word boundary. Returns the phrase length in chars.
fn match_sus_phrase(rest: &[char]) -> Option<usize> {
    match_spaced_sus(rest).or_else(|| match_add_phrase(rest))
}

fn match_spaced_sus(rest: &[char]) -> Option<usize> {
    if !matches_at(rest, 0, "sus") {
        return None;
    }
    let mut i = skip_spaces(rest, 3);
    if rest.get(i) != Some(&'4') {
        return None;
    }
    i += 1;
    boundary_after(rest, i).then_some(i)
}

/// "add 4 subtract 3", "add4 no 3", "add 11 omit 3" and friends
fn match_add_phrase(rest: &[char]) -> Option<usize> {
    if !matches_at(rest, 0, "add") {
        return None;
    }
    let mut i = skip_spaces(rest, 3);
    if matches_at(rest, i, "11") {
        i += 2;
    } else if rest.get(i) == Some(&'4') {
        i += 1;
    } else {
        return None;
    }
    i = skip_spaces(rest, i);
    let keyword = ["subtract", "minus", "omit", "no"]
        .into_iter()
        .find(|kw| matches_at(rest, i, kw))?;
    i = skip_spaces(rest, i + keyword.len());
    if rest.get(i) != Some(&'3') {
        return None;
    }
    i += 1;
    boundary_after(rest, i).then_some(i)
}

fn matches_at(chars: &[char], at: usize, word: &str) -> bool {
    word.chars()
        .enumerate()
        .all(|(k, w)| chars.get(at + k).map_or(false, |c| c.to_ascii_lowercase() == w))
}

fn skip_spaces(chars: &[char], mut at: usize) -> usize {
    while chars.get(at).map_or(false, |c| c.is_whitespace()) {
        at += 1;
    }
    at
}

fn boundary_after(chars: &[char], at: usize) -> bool {
    chars.get(at).map_or(true, |c| !is_word(*c))
}

/// Whitespace runs of two or more become one space; a lone whitespace char
/// stays as written.
fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut ws: Option<(char, usize)> = None;
    for c in s.chars() {
        if c.is_whitespace() {
            ws = match ws {
                None => Some((c, 1)),
                Some((first, n)) => Some((first, n + 1)),
            };
        } else {
            if let Some((first, n)) = ws.take() {
                out.push(if n == 1 { first } else { ' ' });
            }
            out.push(c);
        }
    }
    if let Some((first, n)) = ws {
        out.push(if n == 1 { first } else { ' ' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses() {
        assert_eq!(normalize_literal("  C maj7  "), "C maj7");
        assert_eq!(normalize_literal("C   maj7"), "C maj7");
        assert_eq!(normalize_literal(""), "");
    }

    #[test]
    fn test_root_flat_respelling() {
        assert_eq!(normalize_literal("E-"), "Eb");
        assert_eq!(normalize_literal("E-7"), "Eb7");
        assert_eq!(normalize_literal("A- maj7"), "Ab maj7");
        assert_eq!(normalize_literal("C7/E-"), "C7/Eb");
    }

    #[test]
    fn test_root_sharp_respelling() {
        assert_eq!(normalize_literal("F+"), "F#");
        assert_eq!(normalize_literal("G+(add9)"), "G#(add9)");
    }

    #[test]
    fn test_dash_left_alone_when_not_an_accidental() {
        // 'm' is not a pitch letter, and a following letter is not a separator
        assert_eq!(normalize_literal("Am-7"), "Am-7");
        assert_eq!(normalize_literal("A-b"), "A-b");
    }

    #[test]
    fn test_spaced_sus_folds() {
        assert_eq!(normalize_literal("D7 sus 4"), "D7 sus4");
        assert_eq!(normalize_literal("D7 SUS 4"), "D7 sus4");
        assert_eq!(normalize_literal("D7sus4"), "D7sus4");
    }

    #[test]
    fn test_add_phrases_fold() {
        assert_eq!(normalize_literal("C add 4 subtract 3"), "C sus4");
        assert_eq!(normalize_literal("C add4 subtract3"), "C sus4");
        assert_eq!(normalize_literal("C add4 no 3"), "C sus4");
        assert_eq!(normalize_literal("C add 11 omit 3"), "C sus4");
        assert_eq!(normalize_literal("C(add4 minus 3)"), "C(sus4)");
    }

    #[test]
    fn test_add_phrase_needs_a_word_boundary() {
        assert_eq!(normalize_literal("Cadd4no3"), "Cadd4no3");
    }

    #[test]
    fn test_repeated_sus_collapses() {
        assert_eq!(normalize_literal("D7 sus4 sus4"), "D7 sus4");
        assert_eq!(normalize_literal("D7 sus 4 sus4 sus4"), "D7 sus4");
    }

    #[test]
    fn test_normalize_is_stable() {
        for lit in ["Eb7", "D7 sus4", "C sus4", "Ab maj7", "G#(add9)", "Amin7"] {
            assert_eq!(normalize_literal(lit), lit);
        }
    }
}

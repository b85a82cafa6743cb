// changes-core/src/pattern/matcher_tests.rs

use super::*;
use crate::analyze::SequenceEntry;
use crate::types::{Accidental, ScaleDegree, Token};

fn entry(bar: u32, token: &str, literal: &str) -> SequenceEntry {
    SequenceEntry {
        bar,
        token: Token::from(token),
        literal: literal.to_string(),
    }
}

fn pattern(text: &str) -> Vec<PatternToken> {
    compile_pattern(text).expect(text)
}

#[test]
fn test_compile_exact_elements() {
    let compiled = pattern("ii-7 V7 Imaj7");
    assert_eq!(compiled.len(), 3);
    assert_eq!(compiled[0].suffix, Some(PatternSuffix::Minor7));
    assert_eq!(compiled[1].suffix, Some(PatternSuffix::Dominant7));
    assert_eq!(compiled[2].suffix, Some(PatternSuffix::Maj7));
    assert!(compiled.iter().all(|element| !element.wildcard));
    assert!(compiled.iter().all(|element| element.family.is_none()));
}

#[test]
fn test_compile_accidentals_and_rare_suffixes() {
    let compiled = pattern("bVII7 #ivø7 viio7");
    assert_eq!(compiled[0].head.accidental, Some(Accidental::Flat));
    assert_eq!(compiled[0].head.degree, ScaleDegree::VII);
    assert_eq!(compiled[1].head.accidental, Some(Accidental::Sharp));
    assert_eq!(compiled[1].suffix, Some(PatternSuffix::HalfDim7));
    assert_eq!(compiled[2].suffix, Some(PatternSuffix::Dim7));
    assert!(compiled[2].head.lowercase);
}

#[test]
fn test_compile_wildcards_derive_families() {
    let compiled = pattern("I* V7* ii* imaj7*");
    assert_eq!(compiled[0].family, Some(Family::Major));
    assert_eq!(compiled[1].family, Some(Family::Dominant));
    assert_eq!(compiled[2].family, Some(Family::Minor));
    assert_eq!(compiled[3].family, Some(Family::Minor));
    assert!(compiled.iter().all(|element| element.wildcard));
}

#[test]
fn test_compile_six_nine_spellings_agree() {
    let compact = pattern("I69");
    let slash = pattern("I6/9");
    assert_eq!(compact[0].suffix, Some(PatternSuffix::SixNine));
    assert_eq!(compact, slash);
    assert_eq!(compact[0].text(), "I6/9");
}

#[test]
fn test_compile_rejects_bad_tokens() {
    assert!(compile_pattern("Ii").is_err());
    assert!(compile_pattern("H7").is_err());
    assert!(compile_pattern("V8").is_err());
    assert!(compile_pattern("viiø7*").is_err());
    assert!(compile_pattern("i7*").is_err());
    assert!(compile_pattern("").is_err());
    assert!(compile_pattern("   ").is_err());
}

#[test]
fn test_compile_stops_at_first_bad_token() {
    let err = compile_pattern("V7 x Imaj7").unwrap_err();
    assert_eq!(err.token, "x");
    let rendered = err.to_string();
    assert!(rendered.starts_with("Pattern error: "), "{}", rendered);
    assert!(rendered.ends_with("'x'"), "{}", rendered);
}

#[test]
fn test_token_families() {
    let family = |text: &str| Family::of_token(&Token::from(text));
    assert_eq!(family("I"), Some(Family::Major));
    assert_eq!(family("IV6"), Some(Family::Major));
    assert_eq!(family("Imaj7"), Some(Family::Major));
    assert_eq!(family("I69"), Some(Family::Major));
    assert_eq!(family("I6/9"), Some(Family::Major));
    assert_eq!(family("V7"), Some(Family::Dominant));
    assert_eq!(family("V9"), Some(Family::Dominant));
    assert_eq!(family("V13"), Some(Family::Dominant));
    assert_eq!(family("V7(b9)"), Some(Family::Dominant));
    assert_eq!(family("ii"), Some(Family::Minor));
    assert_eq!(family("ii-6"), Some(Family::Minor));
    assert_eq!(family("ii-7(b9)"), Some(Family::Minor));
    assert_eq!(family("imaj7"), Some(Family::Minor));
    assert_eq!(family("viio7"), None);
    assert_eq!(family("iiø7"), None);
    assert_eq!(family("Isus"), None);
    assert_eq!(family("Germ6"), None);
    assert_eq!(family(""), None);
}

#[test]
fn test_major_wildcard_accepts_its_family() {
    let element = pattern("I*")[0];
    for accepted in ["I", "I6", "Imaj7", "I69"] {
        assert!(matches_token(&element, &Token::from(accepted)), "{}", accepted);
    }
    for rejected in ["ii", "V7", "IV", "i", "I7"] {
        assert!(!matches_token(&element, &Token::from(rejected)), "{}", rejected);
    }
}

#[test]
fn test_dominant_wildcard_accepts_extensions() {
    let element = pattern("V7*")[0];
    for accepted in ["V7", "V9", "V13", "V7(b9)", "V7(b9,#9)"] {
        assert!(matches_token(&element, &Token::from(accepted)), "{}", accepted);
    }
    for rejected in ["Vmaj7", "V", "viiø7", "v-7", "IV7"] {
        assert!(!matches_token(&element, &Token::from(rejected)), "{}", rejected);
    }
}

#[test]
fn test_minor_wildcard_spans_the_minor_qualities() {
    let element = pattern("ii*")[0];
    for accepted in ["ii", "ii-6", "ii-7", "iimaj7", "ii-7(b9)"] {
        assert!(matches_token(&element, &Token::from(accepted)), "{}", accepted);
    }
    for rejected in ["II", "iii", "iio7", "iiø7", "ii9"] {
        assert!(!matches_token(&element, &Token::from(rejected)), "{}", rejected);
    }
}

#[test]
fn test_wildcard_accidental_must_agree() {
    let element = pattern("bVII*")[0];
    assert!(matches_token(&element, &Token::from("bVII6")));
    assert!(!matches_token(&element, &Token::from("VII6")));
    assert!(!matches_token(&element, &Token::from("#VII6")));
}

#[test]
fn test_exact_elements_compare_whole_text() {
    let element = pattern("V7")[0];
    assert!(matches_token(&element, &Token::from("V7")));
    assert!(!matches_token(&element, &Token::from("V7(b9)")));
    assert!(!matches_token(&element, &Token::from("V9")));
    assert!(!matches_token(&element, &Token::from("v7")));
}

#[test]
fn test_exact_six_nine_matches_either_spelling() {
    let element = pattern("I6/9")[0];
    assert!(matches_token(&element, &Token::from("I69")));
    assert!(matches_token(&element, &Token::from("I6/9")));
    assert!(!matches_token(&element, &Token::from("I6")));
}

#[test]
fn test_scan_reports_every_window() {
    let sequence = vec![
        entry(1, "ii-7", "Dm7"),
        entry(2, "V7", "G7"),
        entry(3, "Imaj7", "Cmaj7"),
        entry(4, "V7", "G7"),
    ];
    let hits = scan(&sequence, &pattern("ii-7 V7 Imaj7"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].start_bar, 1);
    assert_eq!(hits[0].tokens[2].as_str(), "Imaj7");
    assert_eq!(hits[0].literals, ["Dm7", "G7", "Cmaj7"]);
}

#[test]
fn test_scan_keeps_overlapping_hits() {
    let sequence = vec![
        entry(1, "I", "C"),
        entry(2, "I", "C"),
        entry(3, "I", "C"),
        entry(4, "I", "C"),
    ];
    let hits = scan(&sequence, &pattern("I I"));
    let starts: Vec<u32> = hits.iter().map(|hit| hit.start_bar).collect();
    assert_eq!(starts, [1, 2, 3]);
}

#[test]
fn test_scan_wildcards_inside_a_window() {
    let sequence = vec![
        entry(1, "ii-7", "Dm7"),
        entry(2, "V9", "G9"),
        entry(3, "I6", "C6"),
    ];
    assert_eq!(scan(&sequence, &pattern("ii* V7* I*")).len(), 1);
    assert_eq!(scan(&sequence, &pattern("ii-7 V7 I6")).len(), 0);
}

#[test]
fn test_scan_empty_token_fails_its_window() {
    let sequence = vec![
        entry(1, "ii-7", "Dm7"),
        entry(2, "", ""),
        entry(3, "V7", "G7"),
    ];
    assert!(scan(&sequence, &pattern("ii-7 V7")).is_empty());
    assert!(scan(&sequence, &pattern("ii*")).len() == 1);
}

#[test]
fn test_scan_short_sequence_has_no_hits() {
    let sequence = vec![entry(1, "V7", "G7")];
    assert!(scan(&sequence, &pattern("ii-7 V7")).is_empty());
    assert!(scan(&[], &pattern("I")).is_empty());
}

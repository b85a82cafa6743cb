// src/corpus/report.rs

//! Console and CSV rendering of scan results.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use changes_core::{token_sequence, MatchHit, PatternToken, SequenceEntry, TokenBuilder};

use crate::corpus::piece::{file_stem, Piece};
use crate::corpus::runner::PieceOutcome;

/// Console report for one scanned file.
///
/// Failures go to stderr and never stop the run. In verbose mode every
/// pattern prints its count; otherwise only patterns with hits appear.
pub fn print_piece(
    outcome: &PieceOutcome,
    patterns: &[(String, Vec<PatternToken>)],
    verbose: bool,
    show_literals: bool,
) {
    let stem = file_stem(&outcome.path);
    let scan = match &outcome.result {
        Ok(scan) => scan,
        Err(error) => {
            eprintln!("{} {}: ERROR ({:#})", "×".red(), stem, error);
            return;
        }
    };
    for ((text, _), hits) in patterns.iter().zip(&scan.per_pattern) {
        if hits.is_empty() && !verbose {
            continue;
        }
        println!("{} {} [{}]: {} hit(s)", "✓".green(), stem, text, hits.len());
        for hit in hits {
            print_hit(hit, show_literals);
        }
    }
}

fn print_hit(hit: &MatchHit, show_literals: bool) {
    let tokens = joined_tokens(hit);
    if show_literals {
        println!(
            "  → bar {}: {}  |  {}",
            hit.start_bar,
            tokens,
            hit.literals.join(" | ")
        );
    } else {
        println!("  → bar {}: {}", hit.start_bar, tokens);
    }
}

/// One-line corpus totals, printed after the per-file report.
pub fn print_summary(outcomes: &[PieceOutcome]) {
    let mut pieces = 0usize;
    let mut errors = 0usize;
    let mut hits = 0usize;
    for outcome in outcomes {
        match &outcome.result {
            Ok(scan) => {
                pieces += 1;
                hits += scan.per_pattern.iter().map(|h| h.len()).sum::<usize>();
            }
            Err(_) => errors += 1,
        }
    }
    println!("{} piece(s) scanned, {} hit(s), {} error(s)", pieces, hits, errors);
}

/// Write one CSV row per hit, in report order.
pub fn write_csv(
    path: &Path,
    outcomes: &[PieceOutcome],
    patterns: &[(String, Vec<PatternToken>)],
    show_literals: bool,
) -> Result<()> {
    let mut out = String::from("Title,Path,Key,BarStart,Pattern,Tokens");
    if show_literals {
        out.push_str(",Literals");
    }
    out.push('\n');

    for outcome in outcomes {
        let Ok(scan) = &outcome.result else { continue };
        for ((text, _), hits) in patterns.iter().zip(&scan.per_pattern) {
            for hit in hits {
                let mut fields = vec![
                    csv_field(&scan.title),
                    csv_field(&outcome.path.display().to_string()),
                    csv_field(&scan.key.to_string()),
                    hit.start_bar.to_string(),
                    csv_field(text),
                    csv_field(&joined_tokens(hit)),
                ];
                if show_literals {
                    fields.push(csv_field(&hit.literals.join(" | ")));
                }
                out.push_str(&fields.join(","));
                out.push('\n');
            }
        }
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

/// Chart view of one piece: key line, then one line per chord.
pub fn print_chart(piece: Piece, builder: &TokenBuilder) {
    println!("Key: {}", piece.key);
    for entry in token_sequence(piece.events, builder) {
        println!("{}", chart_line(&entry));
    }
}

fn chart_line(entry: &SequenceEntry) -> String {
    format!("m {:>3}: {:<8} ({})", entry.bar, entry.token.as_str(), entry.literal)
}

fn joined_tokens(hit: &MatchHit) -> String {
    hit.tokens
        .iter()
        .map(|token| token.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote a field when it contains a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::runner::PieceScan;
    use changes_core::{compile_pattern, Key, Mode, Token};
    use std::path::PathBuf;

    #[test]
    fn test_chart_lines_align() {
        let entry = |bar, token: &str, literal: &str| SequenceEntry {
            bar,
            token: Token::from(token),
            literal: literal.to_string(),
        };
        assert_eq!(chart_line(&entry(1, "ii-7", "Dm7")), "m   1: ii-7     (Dm7)");
        assert_eq!(chart_line(&entry(12, "V7(b9)", "G7(b9)")), "m  12: V7(b9)   (G7(b9))");
        // unresolvable chords keep their line, token column blank
        assert_eq!(chart_line(&entry(3, "", "N.C.")), "m   3:          (N.C.)");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_csv_rows() {
        let hit = MatchHit {
            start_bar: 4,
            tokens: vec![Token::from("ii-7"), Token::from("V7")],
            literals: vec!["Dm7".to_string(), "G7".to_string()],
        };
        let outcomes = vec![
            PieceOutcome {
                path: PathBuf::from("corpus/all, of me.json"),
                result: Ok(PieceScan {
                    title: "All, Of Me".to_string(),
                    key: Key::new("C", Mode::Major),
                    per_pattern: vec![vec![hit]],
                }),
            },
            PieceOutcome {
                path: PathBuf::from("corpus/broken.json"),
                result: Err(anyhow::anyhow!("parsing corpus/broken.json")),
            },
        ];
        let patterns = vec![("ii-7 V7".to_string(), compile_pattern("ii-7 V7").unwrap())];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hits.csv");
        write_csv(&path, &outcomes, &patterns, true).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Title,Path,Key,BarStart,Pattern,Tokens,Literals");
        assert_eq!(
            lines[1],
            "\"All, Of Me\",\"corpus/all, of me.json\",C major,4,ii-7 V7,ii-7 V7,Dm7 | G7"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_without_literals_column() {
        let outcomes = vec![PieceOutcome {
            path: PathBuf::from("x.json"),
            result: Ok(PieceScan {
                title: "X".to_string(),
                key: Key::new("F", Mode::Major),
                per_pattern: vec![Vec::new()],
            }),
        }];
        let patterns = vec![("I".to_string(), compile_pattern("I").unwrap())];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hits.csv");
        write_csv(&path, &outcomes, &patterns, false).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Title,Path,Key,BarStart,Pattern,Tokens\n"
        );
    }
}

// src/corpus/piece.rs

//! Piece interchange files.
//!
//! The analysis front end writes one JSON document per piece: a resolved
//! key, an optional title, and the ordered chord events. Loading converts
//! that document into core types and nothing else; classification happens
//! later, inside the scan.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use changes_core::types::{offset, Offset};
use changes_core::{ChordEvent, Key, Mode};

#[derive(Debug, Deserialize)]
struct PieceFile {
    #[serde(default)]
    title: Option<String>,
    key: KeyFile,
    events: Vec<EventFile>,
}

/// The key arrives either split into fields or as one written string
/// ("Eb", "c", "C minor").
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeyFile {
    Written(String),
    Split { tonic: String, mode: String },
}

#[derive(Debug, Deserialize)]
struct EventFile {
    #[serde(default)]
    bar: u32,
    #[serde(default = "whole_offset")]
    offset: [i64; 2],
    #[serde(default)]
    literal: String,
    #[serde(default)]
    degree: String,
    #[serde(default)]
    quality: String,
}

fn whole_offset() -> [i64; 2] {
    [0, 1]
}

/// One loaded piece, ready for tokenization.
#[derive(Debug)]
pub struct Piece {
    pub title: String,
    pub key: Key,
    pub events: Vec<ChordEvent>,
}

/// Load and convert one piece file.
pub fn load_piece(path: &Path) -> Result<Piece> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: PieceFile =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    let key = match file.key {
        KeyFile::Written(written) => written.parse::<Key>(),
        KeyFile::Split { tonic, mode } => {
            mode.parse::<Mode>().map(|mode| Key::new(&tonic, mode))
        }
    }
    .with_context(|| format!("loading {}", path.display()))?;
    let title = file.title.unwrap_or_else(|| file_stem(path));
    let events = file
        .events
        .into_iter()
        .map(|event| ChordEvent {
            bar: event.bar,
            offset: event_offset(event.offset),
            literal: event.literal,
            degree: event.degree,
            quality: event.quality,
        })
        .collect();
    Ok(Piece { title, key, events })
}

/// A zero denominator degrades to a whole-number offset.
fn event_offset([num, den]: [i64; 2]) -> Offset {
    if den == 0 {
        Offset::from_integer(num)
    } else {
        offset(num, den)
    }
}

/// File stem used for titles and console reporting.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// changes-core/src/types/key.rs
use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Mode::Major),
            "minor" => Ok(Mode::Minor),
            other => Err(anyhow!("Unknown mode: {}", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Concert key of a piece, displayed as "Eb major".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    pub tonic: String,
    pub mode: Mode,
}

impl Key {
    /// Analysis files spell flats and sharps as `-` and `+` ("e-", "f+");
    /// display always uses `b`/`#` with an uppercase tonic letter.
    pub fn new(tonic: &str, mode: Mode) -> Key {
        let mut spelled = tonic.trim().replace('-', "b").replace('+', "#");
        if let Some(first) = spelled.get(..1) {
            let upper = first.to_ascii_uppercase();
            spelled.replace_range(..1, &upper);
        }
        Key {
            tonic: spelled,
            mode,
        }
    }
}

impl FromStr for Key {
    type Err = anyhow::Error;

    /// Accepts "C", "Eb", "A-", "F#", "C minor". A lone tonic reads its
    /// mode off the letter case: "e" is E minor, "E" is E major.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [tonic] => {
                let minor = tonic.starts_with(|c: char| c.is_ascii_lowercase());
                Ok(Key::new(tonic, if minor { Mode::Minor } else { Mode::Major }))
            }
            [tonic, mode] => Ok(Key::new(tonic, mode.parse()?)),
            _ => Err(anyhow!("Unrecognized key: {}", s)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}

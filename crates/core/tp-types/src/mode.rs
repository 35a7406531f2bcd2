//! Decoding mode and malformed-record policy.

use serde::{Deserialize, Serialize};

/// Notation each input line is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// One Turtle statement per line, parsed by a conformant parser
    #[default]
    Turtle,

    /// Three space-separated tokens per line
    Whitespace,
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Turtle => write!(f, "turtle"),
            Self::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// What the decoder does with a line it cannot turn into triples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole run
    #[default]
    Fail,

    /// Log a warning, count the line as skipped and continue
    Skip,
}

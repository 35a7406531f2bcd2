//! Triple type definition.

use serde::{Deserialize, Serialize};

/// Input name that selects standard input instead of a file.
pub const STDIN_INPUT: &str = "-";

/// One RDF statement decoded from an input line.
///
/// All three terms are plain strings: IRIs without angle brackets, literals
/// without quotes. No relationship between triples is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term
    pub subject: String,

    /// Predicate term
    pub predicate: String,

    /// Object term
    pub object: String,
}

impl Triple {
    /// Creates a new triple.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

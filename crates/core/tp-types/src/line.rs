//! Line type definition.

use serde::{Deserialize, Serialize};

/// One line of input, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// 1-based position within the input it was read from
    pub number: u64,

    /// Line content
    pub text: String,
}

impl Line {
    /// Creates a new line.
    pub fn new(number: u64, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

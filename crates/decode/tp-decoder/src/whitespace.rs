//! Whitespace-delimited line parser.

use crate::is_blank_or_comment;
use tp_error::DecodeError;
use tp_traits::LineParser;
use tp_types::Triple;

/// Parser for `subject predicate object` lines.
///
/// The line is split on single spaces, so two adjacent spaces produce an
/// empty token. Tokens after the third are ignored. A line with fewer than
/// three tokens is reported as [`DecodeError::Malformed`]; whether that fails
/// the run is up to the decoder's policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceParser;

impl WhitespaceParser {
    /// Create a new whitespace parser.
    pub fn new() -> Self {
        Self
    }
}

impl LineParser for WhitespaceParser {
    fn parse_line(&self, line_number: u64, line: &str) -> Result<Vec<Triple>, DecodeError> {
        if is_blank_or_comment(line) {
            return Ok(Vec::new());
        }

        let mut tokens = line.split(' ');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(subject), Some(predicate), Some(object)) => {
                Ok(vec![Triple::new(subject, predicate, object)])
            }
            _ => Err(DecodeError::Malformed {
                line: line_number,
                found: line.split(' ').count(),
                input: line.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

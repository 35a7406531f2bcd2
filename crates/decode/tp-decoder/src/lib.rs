//! Line parsers for triplepipe.
//!
//! This crate provides the two [`LineParser`] implementations the decoder
//! stage can be configured with:
//!
//! - [`WhitespaceParser`]: `subject predicate object` separated by single spaces
//! - [`TurtleParser`]: one Turtle statement per line, parsed with `oxttl`
//!
//! # Example
//!
//! ```
//! use tp_decoder::create_parser;
//! use tp_traits::LineParser;
//! use tp_types::{ParseMode, Triple};
//!
//! let parser = create_parser(ParseMode::Whitespace, None).unwrap();
//! let triples = parser.parse_line(1, "alice knows bob").unwrap();
//! assert_eq!(triples, vec![Triple::new("alice", "knows", "bob")]);
//! ```

mod turtle;
mod whitespace;

pub use turtle::TurtleParser;
pub use whitespace::WhitespaceParser;

use tp_traits::LineParser;
use tp_types::ParseMode;

/// Create the parser for a decoding mode.
///
/// `base_iri` only applies to Turtle; whitespace tokens are taken verbatim.
/// Returns an error message if the base IRI is invalid.
pub fn create_parser(
    mode: ParseMode,
    base_iri: Option<&str>,
) -> Result<Box<dyn LineParser>, String> {
    Ok(match mode {
        ParseMode::Turtle => match base_iri {
            Some(base) => Box::new(TurtleParser::new().with_base_iri(base)?),
            None => Box::new(TurtleParser::new()),
        },
        ParseMode::Whitespace => Box::new(WhitespaceParser::new()),
    })
}

/// Returns true for lines that carry no statement at all.
pub(crate) fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

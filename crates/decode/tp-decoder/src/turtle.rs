//! Turtle line parser.
//!
//! Each line is handed to `oxttl` as a complete, independent Turtle document.
//! Prefixes declared on one line are therefore not visible on the next.

use crate::is_blank_or_comment;
use oxrdf::Term;
use tp_error::DecodeError;
use tp_traits::LineParser;
use tp_types::Triple;
use tracing::trace;

/// Parser for lines holding one Turtle statement each.
///
/// A statement may expand to several triples (`;` and `,` lists, blank node
/// property lists). Terms are flattened to strings:
///
/// - IRIs lose their angle brackets (`<ex:a>` becomes `ex:a`)
/// - blank nodes render as `_:label`
/// - literals keep only their lexical value
#[derive(Debug, Clone, Default)]
pub struct TurtleParser {
    base_iri: Option<String>,
}

impl TurtleParser {
    /// Create a new Turtle parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative IRIs against this base.
    ///
    /// Fails if `base_iri` is not an absolute IRI.
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Result<Self, String> {
        let base_iri = base_iri.into();
        oxttl::TurtleParser::new()
            .with_base_iri(base_iri.as_str())
            .map_err(|e| format!("invalid base IRI {base_iri}: {e}"))?;
        self.base_iri = Some(base_iri);
        Ok(self)
    }

    fn build(&self, line_number: u64, line: &str) -> Result<oxttl::TurtleParser, DecodeError> {
        let parser = oxttl::TurtleParser::new();
        match &self.base_iri {
            Some(base) => parser
                .with_base_iri(base.as_str())
                .map_err(|e| DecodeError::Syntax {
                    line: line_number,
                    message: format!("invalid base IRI {base}: {e}"),
                    input: line.to_string(),
                }),
            None => Ok(parser),
        }
    }
}

impl LineParser for TurtleParser {
    fn parse_line(&self, line_number: u64, line: &str) -> Result<Vec<Triple>, DecodeError> {
        if is_blank_or_comment(line) {
            return Ok(Vec::new());
        }

        let mut triples = Vec::new();
        for result in self.build(line_number, line)?.for_reader(line.as_bytes()) {
            let triple = result.map_err(|e| DecodeError::Syntax {
                line: line_number,
                message: e.to_string(),
                input: line.to_string(),
            })?;
            triples.push(flatten(triple));
        }

        trace!(line = line_number, triples = triples.len(), "Parsed Turtle line");
        Ok(triples)
    }

    fn name(&self) -> &'static str {
        "turtle"
    }
}

fn flatten(triple: oxrdf::Triple) -> Triple {
    Triple {
        subject: term_text(triple.subject.into()),
        predicate: triple.predicate.into_string(),
        object: term_text(triple.object),
    }
}

fn term_text(term: Term) -> String {
    match term {
        Term::NamedNode(node) => node.into_string(),
        Term::BlankNode(node) => node.to_string(),
        Term::Literal(literal) => literal.value().to_owned(),
        // Quoted triples, only produced when oxrdf is built with RDF-star
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

//! Core traits for triplepipe.
//!
//! This crate defines the seams between the pipeline and its collaborators:
//! - [`LineParser`] - Turns one input line into zero or more triples
//! - [`TripleWriter`] - Renders decoded triples to a destination

pub mod parser;
pub mod writer;

pub use parser::*;
pub use writer::*;

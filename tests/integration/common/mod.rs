//! Common utilities for integration tests.

pub mod fixtures;

pub use fixtures::{generate_whitespace_lines, write_input, CollectingWriter};

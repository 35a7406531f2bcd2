//! Line parser trait.

use tp_error::DecodeError;
use tp_types::Triple;

/// Trait for line parsers.
///
/// A parser sees one line at a time and keeps no state between lines, so a
/// single instance can be shared by reference across tasks.
///
/// # Implementations
///
/// - Whitespace parser: three space-separated tokens per line
/// - Turtle parser: one Turtle statement per line
pub trait LineParser: Send + Sync {
    /// Parses one line.
    ///
    /// # Arguments
    ///
    /// * `line_number` - 1-based position of the line in its input, for error reporting
    /// * `line` - Line content without its terminator
    ///
    /// # Returns
    ///
    /// The triples the line expands to, in production order. Blank and
    /// comment lines yield an empty vector.
    fn parse_line(&self, line_number: u64, line: &str) -> Result<Vec<Triple>, DecodeError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

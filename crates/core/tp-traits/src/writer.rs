//! Triple writer trait.

use async_trait::async_trait;
use tp_error::Result;
use tp_types::Triple;

/// Trait for triple writers.
///
/// Writers receive triples one at a time, in arrival order, and render them
/// to a destination (stdout, a counter, a test buffer).
#[async_trait]
pub trait TripleWriter: Send + Sync {
    /// Writes a single triple.
    async fn write(&self, triple: &Triple) -> Result<()>;

    /// Flushes any buffered output.
    async fn flush(&self) -> Result<()>;
}

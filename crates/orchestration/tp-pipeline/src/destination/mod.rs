//! Triple writer implementations.
//!
//! - [`BlockWriter`]: four-line text blocks to stdout or any `Write`
//! - [`StatsWriter`]: counts triples without writing them

mod stats;
mod stdout;

pub use stats::{StatsReport, StatsWriter};
pub use stdout::{format_block, BlockWriter, SharedBuffer};

use std::sync::Arc;
use tp_traits::TripleWriter;

/// Destination type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DestinationType {
    /// Four-line blocks on stdout
    #[default]
    Stdout,
    /// Count triples only
    Stats,
}

/// Create the writer for a destination type.
pub fn create_destination(destination: DestinationType) -> Arc<dyn TripleWriter> {
    match destination {
        DestinationType::Stdout => Arc::new(BlockWriter::stdout()),
        DestinationType::Stats => Arc::new(StatsWriter::new()),
    }
}

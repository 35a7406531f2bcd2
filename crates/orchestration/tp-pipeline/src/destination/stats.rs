//! Stats destination implementation.

use super::format_block;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tp_error::Result;
use tp_traits::TripleWriter;
use tp_types::Triple;

/// Destination that counts triples without outputting them.
///
/// Used for throughput runs, where printing would dominate the cost.
#[derive(Debug, Default)]
pub struct StatsWriter {
    triples: AtomicU64,
    bytes: AtomicU64,
}

impl StatsWriter {
    /// Create a new stats writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current statistics.
    pub fn get_stats(&self) -> StatsReport {
        StatsReport {
            triples: self.triples.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
        }
    }
}

/// Statistics report from the stats writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsReport {
    /// Triples received
    pub triples: u64,
    /// Bytes the triples would have taken as output blocks
    pub bytes: u64,
}

#[async_trait]
impl TripleWriter for StatsWriter {
    async fn write(&self, triple: &Triple) -> Result<()> {
        self.triples.fetch_add(1, Ordering::Relaxed);
        self.bytes
            .fetch_add(format_block(triple).len() as u64, Ordering::Relaxed);
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}

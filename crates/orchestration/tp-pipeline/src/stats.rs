//! Statistics for pipeline runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every stage of a run.
///
/// Each stage only bumps its own counters, so relaxed ordering is enough.
#[derive(Debug)]
pub struct PipelineStats {
    /// When the stats were created
    started_at: DateTime<Utc>,

    /// Inputs opened by the line source
    inputs_opened: AtomicU64,

    /// Lines handed to the decoder
    lines_emitted: AtomicU64,

    /// Triples handed to the sink
    triples_decoded: AtomicU64,

    /// Lines dropped under the skip policy
    lines_skipped: AtomicU64,

    /// Triples rendered by the sink's writer
    triples_written: AtomicU64,
}

impl Default for PipelineStats {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            inputs_opened: AtomicU64::new(0),
            lines_emitted: AtomicU64::new(0),
            triples_decoded: AtomicU64::new(0),
            lines_skipped: AtomicU64::new(0),
            triples_written: AtomicU64::new(0),
        }
    }

    /// Record an opened input.
    pub fn record_input_opened(&self) {
        self.inputs_opened.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a line accepted by the decoder's channel.
    pub fn record_line_emitted(&self) {
        self.lines_emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a triple accepted by the sink's channel.
    pub fn record_triple_decoded(&self) {
        self.triples_decoded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a line dropped by the decoder.
    pub fn record_line_skipped(&self) {
        self.lines_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a triple written by the sink.
    pub fn record_triple_written(&self) {
        self.triples_written.fetch_add(1, Ordering::Relaxed);
    }

    /// Lines emitted so far.
    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted.load(Ordering::Relaxed)
    }

    /// Triples decoded so far.
    pub fn triples_decoded(&self) -> u64 {
        self.triples_decoded.load(Ordering::Relaxed)
    }

    /// Triples written so far.
    pub fn triples_written(&self) -> u64 {
        self.triples_written.load(Ordering::Relaxed)
    }

    /// Get a point-in-time copy of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            started_at: self.started_at,
            completed_at: None,
            inputs_opened: self.inputs_opened.load(Ordering::Relaxed),
            lines_emitted: self.lines_emitted.load(Ordering::Relaxed),
            triples_decoded: self.triples_decoded.load(Ordering::Relaxed),
            lines_skipped: self.lines_skipped.load(Ordering::Relaxed),
            triples_written: self.triples_written.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`PipelineStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub inputs_opened: u64,
    pub lines_emitted: u64,
    pub triples_decoded: u64,
    pub lines_skipped: u64,
    pub triples_written: u64,
}

impl StatsSnapshot {
    /// Wall-clock duration of the run, once it has completed.
    pub fn duration(&self) -> Option<Duration> {
        self.completed_at.map(|end| end - self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = PipelineStats::new();
        stats.record_input_opened();
        stats.record_line_emitted();
        stats.record_line_emitted();
        stats.record_triple_decoded();
        stats.record_line_skipped();
        stats.record_triple_written();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.inputs_opened, 1);
        assert_eq!(snapshot.lines_emitted, 2);
        assert_eq!(snapshot.triples_decoded, 1);
        assert_eq!(snapshot.lines_skipped, 1);
        assert_eq!(snapshot.triples_written, 1);
        assert_eq!(stats.lines_emitted(), 2);
    }

    #[test]
    fn test_duration_requires_completion() {
        let mut snapshot = PipelineStats::new().snapshot();
        assert!(snapshot.duration().is_none());

        snapshot.completed_at = Some(snapshot.started_at + Duration::milliseconds(250));
        assert_eq!(snapshot.duration(), Some(Duration::milliseconds(250)));
    }
}

//! Pipeline stages.
//!
//! Every stage owns the receiving end of its inbound channel and the sending
//! end of its outbound channel. Returning from [`Stage::run`] drops the
//! sender, which closes the channel for the next stage. That is the only way
//! a channel is ever closed, so a stage closes its output exactly once and
//! only after its last send.
//!
//! - [`Feeder`]: pushes input names, then closes
//! - [`LineSource`]: input names in, numbered lines out
//! - [`TripleDecoder`]: lines in, triples out
//! - [`TripleSink`]: triples in, rendered output

mod decoder;
mod feeder;
mod line_source;
mod sink;

pub use decoder::TripleDecoder;
pub use feeder::Feeder;
pub use line_source::LineSource;
pub use sink::TripleSink;

use crate::stats::PipelineStats;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tp_error::{PipelineError, Result};

/// An independently scheduled unit of the pipeline.
#[async_trait]
pub trait Stage: Send {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Runs the stage to completion.
    ///
    /// Returns once the inbound channel is closed and drained, or with an
    /// error as soon as the stage cannot continue.
    async fn run(self: Box<Self>, ctx: StageContext) -> Result<()>;
}

/// Handles shared by every stage of one run.
#[derive(Debug, Clone)]
pub struct StageContext {
    cancel: CancellationToken,
    stats: Arc<PipelineStats>,
}

impl StageContext {
    /// Create a context from a cancellation token and shared stats.
    pub fn new(cancel: CancellationToken, stats: Arc<PipelineStats>) -> Self {
        Self { cancel, stats }
    }

    /// Shared run statistics.
    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    /// Returns true once the run has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Completes once the run has been cancelled.
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await
    }

    /// Send a value downstream, waiting for capacity.
    ///
    /// Fails with `Cancelled` if the run is cancelled while waiting, or with
    /// `DownstreamClosed` if the consumer has gone away.
    pub async fn send<T: Send>(&self, stage: &str, tx: &mpsc::Sender<T>, value: T) -> Result<()> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(PipelineError::Cancelled {
                stage: stage.to_string(),
            }),
            sent = tx.send(value) => sent.map_err(|_| PipelineError::DownstreamClosed {
                stage: stage.to_string(),
            }),
        }
    }

    /// Receive the next value from upstream.
    ///
    /// `Ok(None)` means the producer closed the channel and every value it
    /// sent has been received.
    pub async fn recv<T: Send>(&self, stage: &str, rx: &mut mpsc::Receiver<T>) -> Result<Option<T>> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(PipelineError::Cancelled {
                stage: stage.to_string(),
            }),
            value = rx.recv() => Ok(value),
        }
    }
}

//! Triple sink stage.

use super::{Stage, StageContext};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tp_error::Result;
use tp_traits::TripleWriter;
use tp_types::Triple;
use tracing::debug;

/// Terminal stage handing every triple to a [`TripleWriter`], in arrival order.
///
/// The writer is flushed once the inbound channel closes.
pub struct TripleSink {
    triples: mpsc::Receiver<Triple>,
    writer: Arc<dyn TripleWriter>,
}

impl TripleSink {
    /// Stage name.
    pub const NAME: &'static str = "sink";

    /// Create a sink writing to `writer`.
    pub fn new(triples: mpsc::Receiver<Triple>, writer: Arc<dyn TripleWriter>) -> Self {
        Self { triples, writer }
    }
}

#[async_trait]
impl Stage for TripleSink {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(self: Box<Self>, ctx: StageContext) -> Result<()> {
        let Self {
            mut triples,
            writer,
        } = *self;

        while let Some(triple) = ctx.recv(Self::NAME, &mut triples).await? {
            writer.write(&triple).await?;
            ctx.stats().record_triple_written();
        }

        writer.flush().await?;
        debug!(triples = ctx.stats().triples_written(), "Sink drained");
        Ok(())
    }
}

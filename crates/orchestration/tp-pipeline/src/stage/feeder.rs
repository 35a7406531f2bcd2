//! One-shot producer of input names.

use super::{Stage, StageContext};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tp_error::Result;
use tracing::debug;

/// Sends a fixed list of input names to the line source, then closes the
/// channel.
///
/// This is where the command-line argument enters the pipeline.
pub struct Feeder {
    inputs: Vec<String>,
    out: mpsc::Sender<String>,
}

impl Feeder {
    /// Stage name.
    pub const NAME: &'static str = "feeder";

    /// Create a feeder for the given inputs.
    pub fn new<I, S>(inputs: I, out: mpsc::Sender<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            out,
        }
    }

    /// Create a feeder for exactly one input.
    pub fn single(input: impl Into<String>, out: mpsc::Sender<String>) -> Self {
        Self {
            inputs: vec![input.into()],
            out,
        }
    }
}

#[async_trait]
impl Stage for Feeder {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(self: Box<Self>, ctx: StageContext) -> Result<()> {
        let Self { inputs, out } = *self;

        for input in inputs {
            debug!(input = %input, "Feeding input");
            ctx.send(Self::NAME, &out, input).await?;
        }

        debug!("All inputs fed, closing");
        Ok(())
    }
}

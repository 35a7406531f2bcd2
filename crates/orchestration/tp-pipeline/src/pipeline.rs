//! Standard four-stage pipeline assembly.

use crate::config::PipelineConfig;
use crate::runner::{PipelineRunner, RunReport};
use crate::stage::{Feeder, LineSource, TripleDecoder, TripleSink};
use std::sync::Arc;
use tokio::sync::mpsc;
use tp_decoder::create_parser;
use tp_error::{PipelineError, Result};
use tp_traits::{LineParser, TripleWriter};
use tracing::Dispatch;

/// Wires Feeder → LineSource → TripleDecoder → TripleSink.
///
/// Every channel gets the configured capacity. The parser is chosen from the
/// configured mode unless one is supplied explicitly.
pub struct TriplePipeline {
    config: PipelineConfig,
    parser: Option<Box<dyn LineParser>>,
    writer: Arc<dyn TripleWriter>,
    dispatch: Option<Dispatch>,
}

impl TriplePipeline {
    /// Create a pipeline writing to `writer`.
    pub fn new(config: PipelineConfig, writer: Arc<dyn TripleWriter>) -> Self {
        Self {
            config,
            parser: None,
            writer,
            dispatch: None,
        }
    }

    /// Use this parser instead of the one for the configured mode.
    pub fn with_parser(mut self, parser: Box<dyn LineParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Route the stages' logs to `dispatch`.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Wire the stages for `inputs` without starting them.
    pub fn build<I, S>(self, inputs: I) -> Result<PipelineRunner>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.validate().map_err(PipelineError::Usage)?;

        let capacity = self.config.channel_capacity;
        let (name_tx, name_rx) = mpsc::channel(capacity);
        let (line_tx, line_rx) = mpsc::channel(capacity);
        let (triple_tx, triple_rx) = mpsc::channel(capacity);

        let parser = match self.parser {
            Some(parser) => parser,
            None => create_parser(self.config.parse_mode, self.config.base_iri.as_deref())
                .map_err(PipelineError::Usage)?,
        };

        let mut runner = PipelineRunner::new();
        if let Some(dispatch) = self.dispatch {
            runner = runner.with_dispatch(dispatch);
        }

        runner
            .add_stage(Feeder::new(inputs, name_tx))
            .add_stage(LineSource::new(name_rx, line_tx))
            .add_stage(
                TripleDecoder::new(parser, line_rx, triple_tx)
                    .with_policy(self.config.malformed_policy),
            )
            .add_stage(TripleSink::new(triple_rx, self.writer));

        Ok(runner)
    }

    /// Wire the stages for `inputs` and run them to completion.
    pub async fn run<I, S>(self, inputs: I) -> Result<RunReport>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build(inputs)?.run().await
    }
}

//! Line source stage.

use super::{Stage, StageContext};
use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tp_error::{PipelineError, Result};
use tp_types::{Line, STDIN_INPUT};
use tracing::{debug, info};

type InputReader = Box<dyn AsyncBufRead + Send + Unpin>;

/// Reads each named input and emits its lines in order.
///
/// Inputs are processed one after another, in the order their names arrive.
/// Line numbers restart at 1 for every input. `\n` and `\r\n` terminators are
/// stripped. The input handle is dropped as soon as it is exhausted.
pub struct LineSource {
    inputs: mpsc::Receiver<String>,
    out: mpsc::Sender<Line>,
}

impl LineSource {
    /// Stage name.
    pub const NAME: &'static str = "line-source";

    /// Create a line source reading names from `inputs` and sending lines to `out`.
    pub fn new(inputs: mpsc::Receiver<String>, out: mpsc::Sender<Line>) -> Self {
        Self { inputs, out }
    }
}

#[async_trait]
impl Stage for LineSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(self: Box<Self>, ctx: StageContext) -> Result<()> {
        let Self { mut inputs, out } = *self;

        while let Some(input) = ctx.recv(Self::NAME, &mut inputs).await? {
            let reader = open_input(&input).await?;
            ctx.stats().record_input_opened();
            info!(input = %input, "Reading input");

            let lines = emit_lines(&ctx, &input, reader, &out).await?;
            debug!(input = %input, lines, "Input exhausted");
        }

        Ok(())
    }
}

/// Open a named input. `-` selects standard input.
async fn open_input(input: &str) -> Result<InputReader> {
    if input == STDIN_INPUT {
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }

    let file = File::open(input)
        .await
        .map_err(|e| PipelineError::resource(input, e))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Send every line of `reader` downstream. Returns the number of lines sent.
async fn emit_lines(
    ctx: &StageContext,
    input: &str,
    reader: InputReader,
    out: &mpsc::Sender<Line>,
) -> Result<u64> {
    let mut lines = reader.lines();
    let mut number = 0u64;

    loop {
        let next = tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                return Err(PipelineError::Cancelled {
                    stage: LineSource::NAME.to_string(),
                });
            }
            next = lines.next_line() => next.map_err(|e| PipelineError::resource(input, e))?,
        };

        let Some(text) = next else {
            return Ok(number);
        };

        number += 1;
        ctx.send(LineSource::NAME, out, Line::new(number, text)).await?;
        ctx.stats().record_line_emitted();
    }
}

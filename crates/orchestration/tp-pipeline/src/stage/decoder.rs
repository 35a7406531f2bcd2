//! Triple decoder stage.

use super::{Stage, StageContext};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tp_error::Result;
use tp_traits::LineParser;
use tp_types::{Line, MalformedPolicy, Triple};
use tracing::{debug, warn};

/// Turns each line into zero or more triples and forwards them in order.
///
/// Triples from one line are sent in the order the parser produced them,
/// and all of them before any triple of the next line.
pub struct TripleDecoder {
    parser: Box<dyn LineParser>,
    policy: MalformedPolicy,
    lines: mpsc::Receiver<Line>,
    out: mpsc::Sender<Triple>,
}

impl TripleDecoder {
    /// Stage name.
    pub const NAME: &'static str = "decoder";

    /// Create a decoder that fails on the first undecodable line.
    pub fn new(
        parser: Box<dyn LineParser>,
        lines: mpsc::Receiver<Line>,
        out: mpsc::Sender<Triple>,
    ) -> Self {
        Self {
            parser,
            policy: MalformedPolicy::Fail,
            lines,
            out,
        }
    }

    /// Set the malformed-record policy.
    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[async_trait]
impl Stage for TripleDecoder {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(self: Box<Self>, ctx: StageContext) -> Result<()> {
        let Self {
            parser,
            policy,
            mut lines,
            out,
        } = *self;

        debug!(parser = parser.name(), ?policy, "Decoder started");

        while let Some(line) = ctx.recv(Self::NAME, &mut lines).await? {
            let triples = match parser.parse_line(line.number, &line.text) {
                Ok(triples) => triples,
                Err(e) => match policy {
                    MalformedPolicy::Fail => return Err(e.into()),
                    MalformedPolicy::Skip => {
                        warn!(line = line.number, error = %e, "Skipping undecodable line");
                        ctx.stats().record_line_skipped();
                        continue;
                    }
                },
            };

            for triple in triples {
                ctx.send(Self::NAME, &out, triple).await?;
                ctx.stats().record_triple_decoded();
            }
        }

        Ok(())
    }
}

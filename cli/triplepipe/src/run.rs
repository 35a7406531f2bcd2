//! Main execution logic for the triplepipe CLI.

use anyhow::Result;
use tp_pipeline::{create_destination, PipelineConfig, RunReport, TriplePipeline};
use tracing::instrument::WithSubscriber;
use tracing::{info, warn, Dispatch};

use crate::args::Cli;

/// Execute the pipeline with the provided arguments.
///
/// Ctrl-C cancels the run; the stages stop at their next send or receive.
pub async fn execute(args: Cli, dispatch: Dispatch) -> Result<RunReport> {
    let mut config = PipelineConfig::new()
        .with_channel_capacity(args.channel_capacity)
        .with_parse_mode(args.mode.into())
        .with_malformed_policy(args.on_malformed.into());
    if let Some(base_iri) = args.base_iri {
        config = config.with_base_iri(base_iri);
    }

    info!(
        input = %args.infile,
        mode = %config.parse_mode,
        capacity = config.channel_capacity,
        "Starting triplepipe"
    );

    let writer = create_destination(args.destination.into());
    let runner = TriplePipeline::new(config, writer)
        .with_dispatch(dispatch.clone())
        .build([args.infile])?;

    let cancel = runner.cancellation_token();
    let interrupt = tokio::spawn(
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, shutting down");
                cancel.cancel();
            }
        }
        .with_subscriber(dispatch),
    );

    let result = runner.run().await;
    interrupt.abort();

    Ok(result?)
}

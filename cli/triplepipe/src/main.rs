//! triplepipe CLI
//!
//! Streams an RDF file line by line through a staged pipeline and prints
//! every decoded triple.

use clap::Parser;

mod args;
mod run;

use args::Cli;
use tp_cli_common::build_dispatch;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr, so stdout only carries triple blocks
    let dispatch = build_dispatch(args.log_level);
    let _guard = tracing::dispatcher::set_default(&dispatch);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let summary = args.summary;
    let result = runtime.block_on(run::execute(args, dispatch));

    // A stdin read blocks its thread until input arrives; do not wait for it
    runtime.shutdown_background();

    let report = result?;

    if summary {
        let stats = &report.stats;
        eprintln!();
        eprintln!("triplepipe completed:");
        eprintln!("  Inputs read:     {}", stats.inputs_opened);
        eprintln!("  Lines read:      {}", stats.lines_emitted);
        eprintln!("  Lines skipped:   {}", stats.lines_skipped);
        eprintln!("  Triples written: {}", stats.triples_written);
        if let Some(duration) = stats.duration() {
            eprintln!(
                "  Duration:        {:.3}s",
                duration.num_milliseconds() as f64 / 1000.0
            );
        }
    }

    Ok(())
}

//! tp-pipeline - Streaming RDF line pipeline for triplepipe.
//!
//! Four stages run as independent tokio tasks, connected by bounded
//! `mpsc` channels:
//!
//! ```text
//! Feeder → LineSource → TripleDecoder → TripleSink
//! ```
//!
//! - Closing a channel (dropping its sender) is the end-of-stream signal
//! - Bounded capacity gives backpressure from the sink back to the source
//! - A failing stage cancels the rest; the runner returns the root cause
//!
//! # Example
//!
//! ```ignore
//! use tp_pipeline::{PipelineConfig, TriplePipeline, destination::BlockWriter};
//! use tp_types::ParseMode;
//!
//! let config = PipelineConfig::new().with_parse_mode(ParseMode::Whitespace);
//! let report = TriplePipeline::new(config, Arc::new(BlockWriter::stdout()))
//!     .run(["people.txt"])
//!     .await?;
//!
//! eprintln!("Printed {} triples", report.stats.triples_written);
//! ```

pub mod config;
pub mod destination;
pub mod pipeline;
pub mod runner;
pub mod stage;
pub mod stats;

pub use config::{PipelineConfig, DEFAULT_CHANNEL_CAPACITY};
pub use destination::{create_destination, BlockWriter, DestinationType, StatsWriter};
pub use pipeline::TriplePipeline;
pub use runner::{PipelineRunner, RunReport};
pub use stage::{Feeder, LineSource, Stage, StageContext, TripleDecoder, TripleSink};
pub use stats::{PipelineStats, StatsSnapshot};

//! CLI argument definitions for triplepipe.

use clap::{Parser, ValueEnum};
pub use tp_cli_common::LogLevel;
use tp_pipeline::DestinationType;
use tp_types::{MalformedPolicy, ParseMode};

/// Read RDF statements from a file, one per line, and print their triples.
///
/// Each triple is printed to stdout as a block of `S:`, `P:` and `O:` lines
/// followed by a blank line. Logs go to stderr.
///
/// ## Examples
///
/// Turtle, one statement per line:
///   triplepipe --infile data.ttl
///
/// Plain `subject predicate object` lines, skipping bad ones:
///   triplepipe -i people.txt -m whitespace --on-malformed skip
#[derive(Parser, Debug)]
#[command(name = "triplepipe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Input ===
    /// The input file name (`-` reads stdin)
    #[arg(short = 'i', long, env = "TRIPLEPIPE_INFILE")]
    pub infile: String,

    /// Notation each line is written in
    #[arg(short = 'm', long, value_enum, default_value = "turtle")]
    pub mode: Mode,

    /// What to do with a line that cannot be decoded
    #[arg(long, value_enum, default_value = "fail")]
    pub on_malformed: OnMalformed,

    /// Base IRI for resolving relative IRIs in Turtle lines
    #[arg(long, env = "TRIPLEPIPE_BASE_IRI")]
    pub base_iri: Option<String>,

    // === Pipeline ===
    /// Capacity of each channel between stages (must be >= 1)
    #[arg(
        short = 'c',
        long,
        env = "TRIPLEPIPE_CHANNEL_CAPACITY",
        default_value = "16",
        value_parser = parse_positive_usize
    )]
    pub channel_capacity: usize,

    // === Output ===
    /// Output destination type
    #[arg(short = 'd', long, value_enum, default_value = "stdout")]
    pub destination: Destination,

    /// Print a run summary to stderr when done
    #[arg(long)]
    pub summary: bool,

    // === Logging ===
    /// Log level
    #[arg(short = 'l', long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Line notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One Turtle statement per line
    Turtle,
    /// Three space-separated tokens per line
    Whitespace,
}

impl From<Mode> for ParseMode {
    fn from(arg: Mode) -> Self {
        match arg {
            Mode::Turtle => ParseMode::Turtle,
            Mode::Whitespace => ParseMode::Whitespace,
        }
    }
}

/// Malformed-record policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnMalformed {
    /// Stop the run with an error
    Fail,
    /// Log a warning and continue with the next line
    Skip,
}

impl From<OnMalformed> for MalformedPolicy {
    fn from(arg: OnMalformed) -> Self {
        match arg {
            OnMalformed::Fail => MalformedPolicy::Fail,
            OnMalformed::Skip => MalformedPolicy::Skip,
        }
    }
}

/// Destination type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Destination {
    /// Print triple blocks to stdout
    Stdout,
    /// Count triples without printing (for performance testing)
    Stats,
}

impl From<Destination> for DestinationType {
    fn from(arg: Destination) -> Self {
        match arg {
            Destination::Stdout => DestinationType::Stdout,
            Destination::Stats => DestinationType::Stats,
        }
    }
}

/// Parse a positive usize (>= 1).
fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}

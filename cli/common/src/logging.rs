//! Logging initialization utilities.

use tracing::{Dispatch, Level};
use tracing_subscriber::fmt;

use crate::LogLevel;

/// Build the logging dispatcher for the specified level.
///
/// Logs are written to stderr so stdout only carries program output. The
/// dispatcher is returned rather than installed globally; callers pass it to
/// whatever should log through it.
pub fn build_dispatch(level: LogLevel) -> Dispatch {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    Dispatch::new(subscriber)
}

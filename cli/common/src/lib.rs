//! Shared utilities for triplepipe CLI binaries.

pub mod args;
pub mod logging;

pub use args::LogLevel;
pub use logging::build_dispatch;

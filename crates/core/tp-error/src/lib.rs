//! Error types and classification for triplepipe.
//!
//! This crate provides:
//! - [`PipelineError`] - Top-level error enum for everything a stage can fail with
//! - [`DecodeError`] - Errors raised while turning a line into triples
//! - [`ErrorKind`] for choosing which of several stage failures to surface

use thiserror::Error;

/// Top-level error type for triplepipe.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid invocation or configuration, detected before any stage runs
    #[error("Usage error: {0}")]
    Usage(String),

    /// An input could not be opened or read
    #[error("Resource error: {input}: {source}")]
    Resource {
        input: String,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be decoded into triples
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The sink's writer failed
    #[error("Output error: {0}")]
    Write(#[source] std::io::Error),

    /// The stage stopped because the pipeline was cancelled
    #[error("Stage '{stage}' cancelled")]
    Cancelled { stage: String },

    /// The stage's consumer went away before the stage finished sending
    #[error("Stage '{stage}' stopped: downstream channel closed")]
    DownstreamClosed { stage: String },

    /// A stage task panicked
    #[error("Stage '{stage}' panicked: {message}")]
    StagePanicked { stage: String, message: String },
}

/// Errors produced while decoding a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Whitespace-mode record with fewer than three tokens
    #[error("line {line}: expected 3 space-separated tokens, found {found}: {input:?}")]
    Malformed {
        line: u64,
        found: usize,
        input: String,
    },

    /// The triple-notation parser rejected the line
    #[error("line {line}: {message} in {input:?}")]
    Syntax {
        line: u64,
        message: String,
        input: String,
    },
}

impl DecodeError {
    /// 1-based number of the offending line.
    pub fn line(&self) -> u64 {
        match self {
            Self::Malformed { line, .. } | Self::Syntax { line, .. } => *line,
        }
    }
}

/// Error classification.
///
/// `Shutdown` errors are consequences of another stage failing and are never
/// reported as the cause of a failed run when a root cause exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or configuration
    Usage,

    /// Input could not be opened or read
    Resource,

    /// A line could not be decoded
    Decode,

    /// Output could not be written
    Output,

    /// Cancellation or a closed channel caused by another failure
    Shutdown,

    /// A stage panicked
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => write!(f, "Usage"),
            Self::Resource => write!(f, "Resource"),
            Self::Decode => write!(f, "Decode"),
            Self::Output => write!(f, "Output"),
            Self::Shutdown => write!(f, "Shutdown"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

impl PipelineError {
    /// Create a resource error for the named input.
    pub fn resource(input: impl Into<String>, source: std::io::Error) -> Self {
        Self::Resource {
            input: input.into(),
            source,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::Resource { .. } => ErrorKind::Resource,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Write(_) => ErrorKind::Output,
            Self::Cancelled { .. } | Self::DownstreamClosed { .. } => ErrorKind::Shutdown,
            Self::StagePanicked { .. } => ErrorKind::Internal,
        }
    }

    /// Returns true if this error only reflects another stage's failure.
    pub fn is_secondary(&self) -> bool {
        self.kind() == ErrorKind::Shutdown
    }
}

/// Result type alias using PipelineError.
pub type Result<T> = std::result::Result<T, PipelineError>;

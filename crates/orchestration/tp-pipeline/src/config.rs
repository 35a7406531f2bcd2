//! Configuration types for the pipeline.

use serde::{Deserialize, Serialize};
use tp_types::{MalformedPolicy, ParseMode};

/// Default capacity of every channel between two stages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Capacity of each inter-stage channel.
    ///
    /// Bounds how far a producer can run ahead of its consumer.
    pub channel_capacity: usize,

    /// Notation the input lines are written in
    pub parse_mode: ParseMode,

    /// What to do with lines that cannot be decoded
    pub malformed_policy: MalformedPolicy,

    /// Base for relative IRIs in Turtle lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_iri: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            parse_mode: ParseMode::default(),
            malformed_policy: MalformedPolicy::default(),
            base_iri: None,
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel capacity.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Set the parse mode.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Set the malformed-record policy.
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.malformed_policy = policy;
        self
    }

    /// Set the base IRI used to resolve relative IRIs in Turtle mode.
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.channel_capacity == 0 {
            return Err("channel_capacity must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_config_defaults() {
        let config = PipelineConfig::new();

        assert_eq!(config.channel_capacity, 16);
        assert_eq!(config.parse_mode, ParseMode::Turtle);
        assert_eq!(config.malformed_policy, MalformedPolicy::Fail);
        assert_eq!(config.base_iri, None);
    }

    #[test]
    fn test_pipeline_config_builder() {
        let config = PipelineConfig::new()
            .with_channel_capacity(4)
            .with_parse_mode(ParseMode::Whitespace)
            .with_malformed_policy(MalformedPolicy::Skip)
            .with_base_iri("http://example.org/");

        assert_eq!(config.base_iri.as_deref(), Some("http://example.org/"));
        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.parse_mode, ParseMode::Whitespace);
        assert_eq!(config.malformed_policy, MalformedPolicy::Skip);
    }

    #[test]
    fn test_pipeline_config_validation() {
        assert!(PipelineConfig::new().validate().is_ok());

        let invalid = PipelineConfig::new().with_channel_capacity(0);
        assert!(invalid.validate().is_err());
    }
}

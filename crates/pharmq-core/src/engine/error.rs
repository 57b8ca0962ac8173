use super::config::ConfigError;
use crate::core::quantum::sampler::SamplerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    InvalidConfiguration {
        #[from]
        source: ConfigError,
    },

    #[error("Measurement sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplerError,
    },

    #[error("Optimization failed: {0}")]
    Optimization(String),
}

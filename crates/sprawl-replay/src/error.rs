//! Error types for the replay system.

use std::fmt;

use sprawl_core::StepError;
use sprawl_engine::ConfigError;

/// Errors that can occur while re-growing a run for comparison.
#[derive(Debug)]
pub enum ReplayError {
    /// The configuration to re-grow under does not validate.
    Config(ConfigError),
    /// Re-growing the run failed.
    Step(StepError),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "replay config: {e}"),
            Self::Step(e) => write!(f, "replay step: {e}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ReplayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for ReplayError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

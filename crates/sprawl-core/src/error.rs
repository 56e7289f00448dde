//! Error types raised while stepping a growth world.
//!
//! Geometric lookups outside the grid are policy ("not visitable") and
//! never errors. Running out of unobstructed moves is a normal dead end.
//! What remains are caller mistakes and a broken random source.

use std::error::Error;
use std::fmt;

/// Errors from `advance()` and related stepping calls.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The random source produced a value outside `[0, 1)`.
    ///
    /// The world halts on this error; every later call returns
    /// [`StepError::Halted`].
    InvalidDraw {
        /// The offending value.
        value: f64,
    },
    /// The world halted after an earlier [`StepError::InvalidDraw`].
    Halted,
    /// Elapsed time was negative, NaN, or infinite. No state changed.
    InvalidElapsed {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDraw { value } => {
                write!(f, "random source produced {value}, outside [0, 1)")
            }
            Self::Halted => write!(f, "world halted after a broken random draw"),
            Self::InvalidElapsed { value } => {
                write!(f, "elapsed time must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for StepError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_value() {
        let msg = format!("{}", StepError::InvalidDraw { value: 1.5 });
        assert!(msg.contains("1.5"));
        let msg = format!("{}", StepError::InvalidElapsed { value: -3.0 });
        assert!(msg.contains("-3"));
    }

    #[test]
    fn halted_display() {
        assert!(format!("{}", StepError::Halted).contains("halted"));
    }
}

/*
 * Error Module
 *
 * Configuration errors are fatal at setup: every invariant the simulation relies on
 * is checked before the first tick, and a violation aborts startup with a message
 * naming the offending values. Nothing in a running tick can fail.
 */

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("neutral distance ({neutral}) must be smaller than max distance ({max})")]
    NeutralNotBelowMax { neutral: f64, max: f64 },

    #[error("force coefficient must not be negative, got {0}")]
    NegativeCoefficient(f64),

    #[error("particle radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("radius range is inverted: min {min} > max {max}")]
    InvertedRadiusRange { min: f64, max: f64 },

    #[error("simulation bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("line alpha range is invalid: min {min} must be below max {max}")]
    InvalidAlphaRange { min: f64, max: f64 },

    #[error("{name} must not be negative, got {value}")]
    NegativeParameter { name: &'static str, value: f64 },

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("tick rate must be positive, got {0}")]
    InvalidTickRate(f64),

    #[error("a pair interaction needs two distinct particles, got index {0} twice")]
    SelfPair(usize),

    #[error("failed to read scenario file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file")]
    Parse(#[from] serde_yaml::Error),
}

// Reject NaN and infinities before they reach any comparison
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeParameter { name, value });
    }
    Ok(())
}

//! Errors at the configuration boundary.
//!
//! The contrast math itself cannot fail on finite input; only parsing role
//! names and loading options can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("unknown contrast role {0:?} (expected primary, secondary, link or neon-link)")]
    UnknownRole(String),

    #[error("failed to parse contrast options: {0}")]
    Toml(#[from] toml::de::Error),

    /// A contrast ratio floor that no pair of colors can express.
    #[error("`{name}` must be a finite contrast ratio >= 1.0, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("`{name}` must be a finite, non-negative amount, got {value}")]
    InvalidAmount { name: &'static str, value: f64 },
}

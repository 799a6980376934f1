//! Error types for the body metrics engine
//!
//! The calculators themselves never fail; these errors only cover building
//! a complete profile from partial input and loading settings.

use thiserror::Error;

/// Errors raised while assembling a computable profile
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Settings loading error types
#[cfg(feature = "settings")]
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

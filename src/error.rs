//! Error type for configuration loading.
//!
//! Widget interactions never fail; rejected actions are reported as `false`
//! from the operation instead. Only turning external data into a
//! [`Config`](crate::select::Config) can produce an [`Error`].

use thiserror::Error;

/// Errors that can occur when loading a select configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration document could not be parsed.
    #[error("invalid select configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Two options share the same value.
    #[error("duplicate option value '{0}'")]
    DuplicateValue(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

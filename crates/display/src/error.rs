//! Adapter error types.

use thiserror::Error;

/// Errors raised by the host environment while a fullscreen method runs.
///
/// A method that does not exist is not an error; the adapter treats that as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Host call `{method}` failed: {reason}")]
    CallFailed { method: &'static str, reason: String },
}

/// Errors that can occur while loading adapter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid adapter config: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Crate-wide error type.

use thiserror::Error;

/// Errors produced while configuring or serving components.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Socket or filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A variant slug did not match any known value.
    #[error("unknown {kind} `{value}`")]
    UnknownVariant {
        /// Which enum was being parsed (e.g. "sync status").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

/// Convenience result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

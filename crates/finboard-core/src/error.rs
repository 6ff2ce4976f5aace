use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
}

/// Failure of a single finance service query.
#[derive(Debug, Error)]
pub enum FinanceError {
    /// Transport failure, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FinanceError {
    /// Transport error when the failure happened below HTTP.
    pub fn transport(&self) -> Option<&HttpError> {
        match self {
            Self::Transport(error) => Some(error),
            _ => None,
        }
    }
}

/// Configuration errors raised at process entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {name} must be set")]
    MissingVar { name: &'static str },

    #[error("{name} is not a valid symbol: {source}")]
    InvalidSymbol {
        name: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

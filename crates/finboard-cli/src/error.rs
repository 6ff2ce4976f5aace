use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] finboard_core::ValidationError),

    #[error(transparent)]
    Config(#[from] finboard_core::ConfigError),

    #[error(transparent)]
    Finance(#[from] finboard_core::FinanceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Config(_) => 2,
            Self::Finance(_) => 3,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use finboard_core::{FinanceError, HttpError, Symbol};

    use super::*;

    #[test]
    fn exit_codes_follow_error_category() {
        let validation = Symbol::parse("").expect_err("empty symbol");
        assert_eq!(CliError::from(validation).exit_code(), 2);

        let finance = FinanceError::from(HttpError::new("Network error"));
        let error = CliError::from(finance);
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.to_string(), "Network error");
    }
}

//! Dashboard configuration.
//!
//! Built once at process entry and handed to the client and controller.
//! Nothing below this module reads the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `FINBOARD_API_URL` | Finance service base URL | required |
//! | `FINBOARD_DEFAULT_SYMBOL` | Symbol shown on start | none |
//! | `FINBOARD_REFRESH_MS` | Refresh interval in milliseconds | `300000` |

use std::path::Path;
use std::time::Duration;

use crate::{ConfigError, Symbol};

pub const API_URL_VAR: &str = "FINBOARD_API_URL";
pub const DEFAULT_SYMBOL_VAR: &str = "FINBOARD_DEFAULT_SYMBOL";
pub const REFRESH_MS_VAR: &str = "FINBOARD_REFRESH_MS";

/// Used when the refresh interval is unset, not a number, or not positive.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(300_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub default_symbol: Option<Symbol>,
    pub refresh_interval: Duration,
}

impl DashboardConfig {
    /// Load `.env` from the working directory (if any), then read the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|_| None)
    }

    /// Like [`Self::from_env`], but `overrides` answers first. Used for
    /// command-line flags.
    pub fn from_env_with<F>(overrides: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(error) if error.not_found() => {}
            Err(error) => return Err(ConfigError::EnvFile(error)),
        }
        Self::from_lookup(|name| overrides(name).or_else(|| std::env::var(name).ok()))
    }

    /// Load variables from a specific env file, then read the process
    /// environment. Variables already set in the process win.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::from_path(path.as_ref())?;
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_URL_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar { name: API_URL_VAR })?;

        let default_symbol = match lookup(DEFAULT_SYMBOL_VAR) {
            Some(value) if !value.trim().is_empty() => Some(Symbol::parse(&value).map_err(
                |source| ConfigError::InvalidSymbol {
                    name: DEFAULT_SYMBOL_VAR,
                    source,
                },
            )?),
            _ => None,
        };

        let refresh_interval = parse_refresh_interval(lookup(REFRESH_MS_VAR).as_deref());

        Ok(Self {
            api_base_url,
            default_symbol,
            refresh_interval,
        })
    }
}

/// Interval in milliseconds, falling back to [`DEFAULT_REFRESH_INTERVAL`].
pub fn parse_refresh_interval(value: Option<&str>) -> Duration {
    value
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|millis| millis.is_finite() && *millis >= 1.0)
        .map(|millis| Duration::from_millis(millis as u64))
        .unwrap_or(DEFAULT_REFRESH_INTERVAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_interval_falls_back_to_five_minutes() {
        assert_eq!(parse_refresh_interval(None), DEFAULT_REFRESH_INTERVAL);
        assert_eq!(parse_refresh_interval(Some("soon")), DEFAULT_REFRESH_INTERVAL);
        assert_eq!(parse_refresh_interval(Some("0")), DEFAULT_REFRESH_INTERVAL);
        assert_eq!(parse_refresh_interval(Some("-1000")), DEFAULT_REFRESH_INTERVAL);
        assert_eq!(parse_refresh_interval(Some("")), DEFAULT_REFRESH_INTERVAL);
    }

    #[test]
    fn refresh_interval_reads_milliseconds() {
        assert_eq!(parse_refresh_interval(Some("1000")), Duration::from_secs(1));
        assert_eq!(parse_refresh_interval(Some(" 2500 ")), Duration::from_millis(2_500));
    }
}

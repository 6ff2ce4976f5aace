//! Behavior tests for configuration loading.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use finboard_core::{ConfigError, DashboardConfig, DEFAULT_REFRESH_INTERVAL};

/// Serializes tests that write the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars = vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>();
    move |name| vars.get(name).cloned()
}

#[test]
fn when_all_variables_are_set_config_reflects_them() {
    let config = DashboardConfig::from_lookup(lookup(&[
        ("FINBOARD_API_URL", "http://localhost:8000"),
        ("FINBOARD_DEFAULT_SYMBOL", "aapl"),
        ("FINBOARD_REFRESH_MS", "1000"),
    ]))
    .expect("valid config");

    assert_eq!(config.api_base_url, "http://localhost:8000");
    assert_eq!(
        config.default_symbol.as_ref().map(|s| s.as_str()),
        Some("AAPL")
    );
    assert_eq!(config.refresh_interval, Duration::from_secs(1));
}

#[test]
fn when_optional_variables_are_missing_defaults_apply() {
    let config = DashboardConfig::from_lookup(lookup(&[("FINBOARD_API_URL", "http://api")]))
        .expect("valid config");

    assert_eq!(config.default_symbol, None);
    assert_eq!(config.refresh_interval, DEFAULT_REFRESH_INTERVAL);
    assert_eq!(DEFAULT_REFRESH_INTERVAL, Duration::from_secs(300));
}

#[test]
fn when_refresh_interval_is_invalid_five_minutes_is_used() {
    let config = DashboardConfig::from_lookup(lookup(&[
        ("FINBOARD_API_URL", "http://api"),
        ("FINBOARD_REFRESH_MS", "every now and then"),
    ]))
    .expect("valid config");

    assert_eq!(config.refresh_interval, DEFAULT_REFRESH_INTERVAL);
}

#[test]
fn when_api_url_is_missing_loading_fails() {
    let error = DashboardConfig::from_lookup(lookup(&[("FINBOARD_DEFAULT_SYMBOL", "AAPL")]))
        .expect_err("api url is required");

    assert!(matches!(
        error,
        ConfigError::MissingVar {
            name: "FINBOARD_API_URL"
        }
    ));
}

#[test]
fn when_default_symbol_is_invalid_loading_fails() {
    let error = DashboardConfig::from_lookup(lookup(&[
        ("FINBOARD_API_URL", "http://api"),
        ("FINBOARD_DEFAULT_SYMBOL", "NOT A SYMBOL"),
    ]))
    .expect_err("invalid symbol");

    assert!(matches!(error, ConfigError::InvalidSymbol { .. }));
}

#[test]
fn env_file_values_are_loaded() {
    let _env = ENV_LOCK.lock().expect("env lock");
    let mut file = tempfile::NamedTempFile::new().expect("temp env file");
    writeln!(file, "FINBOARD_API_URL=http://from-env-file:9000").expect("write");
    writeln!(file, "FINBOARD_DEFAULT_SYMBOL=MSFT").expect("write");

    let config = DashboardConfig::from_env_file(file.path()).expect("config from env file");

    assert_eq!(config.api_base_url, "http://from-env-file:9000");
    assert_eq!(
        config.default_symbol.as_ref().map(|s| s.as_str()),
        Some("MSFT")
    );
}

#[test]
fn command_line_overrides_win_over_the_environment() {
    let _env = ENV_LOCK.lock().expect("env lock");
    std::env::set_var("FINBOARD_API_URL", "http://from-process-env:7000");
    std::env::set_var("FINBOARD_REFRESH_MS", "2000");

    let config = DashboardConfig::from_env_with(|name| match name {
        "FINBOARD_API_URL" => Some(String::from("http://from-flag:8000")),
        "FINBOARD_DEFAULT_SYMBOL" => Some(String::from("tsla")),
        _ => None,
    });

    std::env::remove_var("FINBOARD_API_URL");
    std::env::remove_var("FINBOARD_REFRESH_MS");

    let config = config.expect("config from flags and env");
    assert_eq!(config.api_base_url, "http://from-flag:8000");
    assert_eq!(
        config.default_symbol.as_ref().map(|s| s.as_str()),
        Some("TSLA")
    );
    assert_eq!(config.refresh_interval, Duration::from_secs(2));
}

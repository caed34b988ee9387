use std::{collections::HashMap, time::Duration};

use catalog_api::config::AppConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() -> anyhow::Result<()> {
    let config = AppConfig::from_lookup(lookup(&[]))?;
    assert_eq!(config.database_url, "sqlite://catalog.db?mode=rwc");
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 5000);
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(config.slow_request_threshold, Duration::from_millis(1000));
    assert!(config.seed_on_startup);
    Ok(())
}

#[test]
fn values_are_read_from_the_environment() -> anyhow::Result<()> {
    let config = AppConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://app@localhost/catalog"),
        ("APP_HOST", "127.0.0.1"),
        ("APP_PORT", "8080"),
        ("API_TIMEOUT", "30"),
        ("SLOW_REQUEST_MS", "250"),
        ("SEED_ON_STARTUP", "false"),
    ]))?;
    assert_eq!(config.database_url, "postgres://app@localhost/catalog");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.slow_request_threshold, Duration::from_millis(250));
    assert!(!config.seed_on_startup);
    Ok(())
}

#[test]
fn malformed_numbers_are_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("APP_PORT", "eighty")])).unwrap_err();
    assert!(err.to_string().contains("APP_PORT"));
}

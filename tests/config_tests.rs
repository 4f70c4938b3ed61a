//! Configuration loading tests

use gh_managers::config::Config;
use gh_managers::constants;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghm.yaml");
    fs::write(
        &path,
        "---\ntoken: ghp_from_file\napi_url: https://ghe.example.com/api/v3\nuser_agent: my-tool/1.0\ntimeout_secs: 10\n",
    )
    .unwrap();

    let config = Config::load(path.to_str().unwrap()).unwrap();
    assert_eq!(config.token.as_deref(), Some("ghp_from_file"));
    assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
    assert_eq!(config.user_agent, "my-tool/1.0");
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn test_load_missing_file_fails_but_load_or_default_does_not() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");
    let path = path.to_str().unwrap();

    let err = Config::load(path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));

    let config = Config::load_or_default(path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghm.yaml");
    fs::write(&path, "api_url: not a url\ntimeout_secs: 0\n").unwrap();

    let err = Config::load(path.to_str().unwrap()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("api_url must be an http(s) URL"));
    assert!(message.contains("timeout_secs must be greater than zero"));
}

#[test]
fn test_load_rejects_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghm.yaml");
    fs::write(&path, "timeout_secs: [1, 2\n").unwrap();

    let err = Config::load(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ghm.yaml");
    let path = path.to_str().unwrap();

    let config = Config {
        timeout_secs: 45,
        ..Config::default()
    };
    config.save(path).unwrap();

    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(!content.contains("token"));
    assert_eq!(Config::load(path).unwrap(), config);
}

#[test]
#[serial]
fn test_token_resolution_order() {
    // SAFETY: serialized with other environment-mutating tests
    unsafe { std::env::set_var(constants::github::TOKEN_ENV_VAR, "ghp_env") };

    let without_file_token = Config::default();
    assert_eq!(
        without_file_token.resolve_token(None).as_deref(),
        Some("ghp_env")
    );

    let with_file_token = Config {
        token: Some("ghp_file".to_string()),
        ..Config::default()
    };
    assert_eq!(with_file_token.resolve_token(None).as_deref(), Some("ghp_file"));
    assert_eq!(
        with_file_token
            .resolve_token(Some("ghp_flag".to_string()))
            .as_deref(),
        Some("ghp_flag")
    );

    unsafe { std::env::remove_var(constants::github::TOKEN_ENV_VAR) };
    assert_eq!(without_file_token.resolve_token(None), None);
}

#[test]
#[serial]
fn test_blank_tokens_are_ignored() {
    // SAFETY: serialized with other environment-mutating tests
    unsafe { std::env::set_var(constants::github::TOKEN_ENV_VAR, "   ") };
    let config = Config::default();
    assert_eq!(config.resolve_token(Some(String::new())), None);

    let github = config.build_client(None).unwrap();
    assert!(!github.client().is_authenticated());
    unsafe { std::env::remove_var(constants::github::TOKEN_ENV_VAR) };
}

#[test]
#[serial]
fn test_blank_flag_token_falls_back_to_file_and_environment() {
    // SAFETY: serialized with other environment-mutating tests
    unsafe { std::env::set_var(constants::github::TOKEN_ENV_VAR, "ghp_env") };

    let with_file_token = Config {
        token: Some("ghp_file".to_string()),
        ..Config::default()
    };
    assert_eq!(
        with_file_token.resolve_token(Some("  ".to_string())).as_deref(),
        Some("ghp_file")
    );

    let blank_file_token = Config {
        token: Some(String::new()),
        ..Config::default()
    };
    assert_eq!(
        blank_file_token.resolve_token(Some(String::new())).as_deref(),
        Some("ghp_env")
    );

    unsafe { std::env::remove_var(constants::github::TOKEN_ENV_VAR) };
}

use serial_test::serial;
use status_kit::config::AppConfig;
use std::env;
use std::fs;
use std::io::Write;

const ARGS: [&str; 1] = ["status-kit"];

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("STATUS_KIT_SERVER__PORT");
        env::remove_var("STATUS_KIT_UI__TITLE");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
    }
}

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(ARGS).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.ui.title, "Status Kit");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("STATUS_KIT_SERVER__PORT", "9090");
        env::set_var("STATUS_KIT_UI__TITLE", "Preview");
    }

    let config = AppConfig::load_from_args(ARGS).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.title, "Preview");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load_via_flag() {
    clear_env_vars();

    let file = yaml_file("server:\n  port: 7070\nui:\n  title: From File\n");
    let path = file.path().to_string_lossy().to_string();

    let config = AppConfig::load_from_args(["status-kit", "--config", path.as_str()])
        .expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.ui.title, "From File");
    // Unset keys keep their defaults
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_file_load_via_env() {
    clear_env_vars();

    let file = yaml_file("server:\n  port: 7171\n");
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args(ARGS).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7171);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["status-kit", "--config", "does/not/exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_precedence_cli_over_env_over_file() {
    clear_env_vars();

    let file = yaml_file("server:\n  port: 7070\n  host: 10.0.0.1\n");
    let path = file.path().to_string_lossy().to_string();
    unsafe {
        env::set_var("STATUS_KIT_SERVER__PORT", "8080");
    }

    let config = AppConfig::load_from_args(["status-kit", "--config", path.as_str()])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "10.0.0.1");

    let config = AppConfig::load_from_args([
        "status-kit",
        "--config",
        path.as_str(),
        "--port",
        "4000",
        "--host",
        "127.0.0.1",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./config.yaml
    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args(ARGS);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}

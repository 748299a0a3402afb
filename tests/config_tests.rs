// Config loading and validation tests

use docker_memreport::config::AppConfig;

const VALID_CONFIG: &str = r#"
[docker]
socket_path = "/var/run/docker.sock"

[report]
min_column_padding = 5
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(
        config.docker.socket_path.as_deref(),
        Some("/var/run/docker.sock")
    );
    assert_eq!(config.report.min_column_padding, 5);
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.docker.socket_path, None);
    assert_eq!(config.report.min_column_padding, 3);
}

#[test]
fn test_config_validation_rejects_zero_padding() {
    let bad = VALID_CONFIG.replace("min_column_padding = 5", "min_column_padding = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("min_column_padding"));
}

#[test]
fn test_config_validation_rejects_empty_socket_path() {
    let bad = VALID_CONFIG.replace("\"/var/run/docker.sock\"", "\"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("socket_path"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.report.min_column_padding, 5);
}

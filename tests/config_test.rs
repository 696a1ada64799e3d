use clap::Parser;
use niomag::{AppError, CliConfig, ServerConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_values_are_loaded() {
    let file = write_config(
        r#"
[server]
host = "0.0.0.0"
port = 8080

[cors]
allowed_origins = ["https://shop.example", "http://localhost:5173"]
allow_credentials = false
max_age_seconds = 600
"#,
    );

    let config = ServerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.bind_address(), ("0.0.0.0", 8080));
    assert_eq!(config.cors.allowed_origins.len(), 2);
    assert!(!config.cors.allow_credentials);
    assert_eq!(config.cors.max_age_seconds, Some(600));
}

#[test]
fn test_cli_flags_override_file() {
    let file = write_config("[server]\nhost = \"0.0.0.0\"\nport = 8080\n");
    let path = file.path().to_str().unwrap();

    let cli = CliConfig::try_parse_from(["niomag", "--config", path, "--port", "9100"]).unwrap();
    let config = cli.resolve().unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9100);
}

#[test]
fn test_invalid_origin_in_file_fails_resolution() {
    let file = write_config("[cors]\nallowed_origins = [\"shop.example/path\"]\n");
    let path = file.path().to_str().unwrap();

    let cli = CliConfig::try_parse_from(["niomag", "--config", path]).unwrap();
    match cli.resolve() {
        Err(AppError::InvalidConfigValueError { field, .. }) => {
            assert_eq!(field, "cors.allowed_origins")
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_unreadable_file_is_config_error() {
    let err = ServerConfig::from_file("/nonexistent/niomag.toml").unwrap_err();
    assert!(matches!(err, AppError::ConfigError { .. }));
}

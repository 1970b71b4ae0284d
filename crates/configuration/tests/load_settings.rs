use configuration::error::ConfigError;
use configuration::load_settings;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn empty_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let settings = load_settings(Some(&path)).unwrap();
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert!(!settings.server.trust_forwarded_headers);
    assert_eq!(settings.database.host, "localhost");
    assert_eq!(settings.database.port, 5432);
    assert_eq!(settings.database.database_name, "countries_db");
    assert_eq!(settings.database.max_connections, 10);
    assert_eq!(settings.database.acquire_timeout().as_secs(), 5);
    assert_eq!(settings.log.filter, "info");
    assert!(settings.log.directory.is_none());
}

#[test]
fn file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
host = "127.0.0.1"
port = 9000

[database]
host = "db.internal"
username = "directory"
password = "secret"
database_name = "atlas"
max_connections = 3

[log]
filter = "debug"
directory = "/var/log/countries"
"#,
    );

    let settings = load_settings(Some(&path)).unwrap();
    assert_eq!(settings.server.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    assert_eq!(settings.database.host, "db.internal");
    assert_eq!(settings.database.port, 5432);
    assert_eq!(settings.database.username, "directory");
    assert_eq!(settings.database.password, "secret");
    assert_eq!(settings.database.database_name, "atlas");
    assert_eq!(settings.database.max_connections, 3);
    assert_eq!(settings.log.filter, "debug");
    assert_eq!(
        settings.log.directory,
        Some(PathBuf::from("/var/log/countries"))
    );
}

#[test]
fn zero_connections_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[database]\nmax_connections = 0\n");

    let err = load_settings(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)), "{err}");
}

#[test]
fn unparseable_server_host_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nhost = \"not an address\"\n");

    let err = load_settings(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)), "{err}");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_settings(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError(_)), "{err}");
}

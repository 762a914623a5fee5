use albumd::cli::Args;
use albumd::config::{load_config, Config, ConfigError, FileConfig};
use clap::Parser;

fn make_args(host: Option<&str>, port: Option<u16>) -> Args {
    Args {
        host: host.map(str::to_string),
        port,
        config: None,
    }
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::resolve(None, &make_args(None, None));
    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr(), "localhost:8080");
}

#[test]
fn test_cli_flag_overrides_default() {
    let config = Config::resolve(None, &make_args(Some("0.0.0.0"), Some(9000)));
    assert_eq!(config.bind_addr(), "0.0.0.0:9000");
}

#[test]
fn test_toml_overrides_default() {
    let file = FileConfig { host: Some("127.0.0.1".into()), port: Some(7777) };
    let config = Config::resolve(Some(file), &make_args(None, None));
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 7777);
}

#[test]
fn test_cli_overrides_toml() {
    let file = FileConfig { host: Some("127.0.0.1".into()), port: Some(7777) };
    let config = Config::resolve(Some(file), &make_args(None, Some(9000)));
    assert_eq!(config.port, 9000); // CLI wins
    assert_eq!(config.host, "127.0.0.1"); // untouched key falls through to TOML
}

#[test]
fn test_toml_parse() {
    let parsed: FileConfig = toml::from_str("host = \"::1\"\nport = 9000\n").unwrap();
    assert_eq!(parsed.host.as_deref(), Some("::1"));
    assert_eq!(parsed.port, Some(9000));
}

#[test]
fn test_toml_unknown_fields_ignored() {
    let parsed: Result<FileConfig, _> = toml::from_str("port = 9000\nunknown_future_key = true\n");
    assert!(parsed.is_ok());
}

#[test]
fn test_load_missing_file_is_read_error() {
    let err = load_config(std::path::Path::new("/definitely/not/here/albumd.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }), "{err}");
    assert!(err.to_string().contains("/definitely/not/here/albumd.toml"), "{err}");
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let path = std::env::temp_dir().join(format!("albumd-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();
    let err = load_config(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn test_load_valid_toml() {
    let path = std::env::temp_dir().join(format!("albumd-ok-{}.toml", std::process::id()));
    std::fs::write(&path, "host = \"0.0.0.0\"\n").unwrap();
    let loaded = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(loaded.port, None);
}

#[test]
fn test_cli_parses_short_flags() {
    let args = Args::try_parse_from(["albumd", "-H", "0.0.0.0", "-p", "3000", "-c", "x.toml"]).unwrap();
    assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(args.port, Some(3000));
    assert_eq!(args.config.as_deref(), Some(std::path::Path::new("x.toml")));
}

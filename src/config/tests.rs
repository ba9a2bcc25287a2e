use super::{
    ConfigFormat, DEFAULT_CONFIG_FILES, apply_config, load_config, load_config_file,
    types::ConfigFile,
};
use clap::{CommandFactory, FromArgMatches};
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{OutputFormat, TesterArgs};

fn parse_with_matches(argv: &[&str]) -> Result<(TesterArgs, clap::ArgMatches), String> {
    let matches = TesterArgs::command()
        .try_get_matches_from(argv)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args =
        TesterArgs::from_arg_matches(&matches).map_err(|err| format!("args failed: {}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    let content = r#"
url = "http://localhost:3000/"
concurrency = 16
requests = 500
timeout = 2.5
output_format = "json"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.url.as_deref() != Some("http://localhost:3000/") {
        return Err("Unexpected url".to_owned());
    }
    if config.concurrency != Some(16) || config.requests != Some(500) {
        return Err("Unexpected counts".to_owned());
    }
    if config.timeout.map(|value| (value - 2.5).abs() < 1e-9) != Some(true) {
        return Err("Unexpected timeout".to_owned());
    }
    if config.output_format != Some(OutputFormat::Json) {
        return Err("Unexpected output_format".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_with_integer_timeout() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.json");
    let content = r#"{ "url": "http://localhost:3000/", "timeout": 3, "no_progress": true }"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.timeout.map(|value| (value - 3.0).abs() < 1e-9) != Some(true) {
        return Err("Unexpected timeout".to_owned());
    }
    if config.no_progress != Some(true) {
        return Err("Expected no_progress".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    std::fs::write(&path, "url = \"http://x\"\nretries = 3\n")
        .map_err(|err| format!("write failed: {}", err))?;

    if load_config_file(&path).is_ok() {
        return Err("Expected unknown key to fail".to_owned());
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.yaml");
    std::fs::write(&path, "url: http://x\n").map_err(|err| format!("write failed: {}", err))?;

    if load_config_file(&path).is_ok() {
        return Err("Expected yaml config to fail".to_owned());
    }
    Ok(())
}

#[test]
fn cli_values_take_precedence_over_config() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["volley", "-c", "4"])?;
    let config = ConfigFile {
        url: Some("http://localhost:9000/".to_owned()),
        concurrency: Some(64),
        requests: Some(10),
        timeout: Some(0.5),
        output_format: None,
        no_progress: Some(true),
    };

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.url.as_deref() != Some("http://localhost:9000/") {
        return Err("Expected url from config".to_owned());
    }
    if args.concurrency.get() != 4 {
        return Err("Expected CLI concurrency to win".to_owned());
    }
    if args.requests.get() != 10 {
        return Err("Expected requests from config".to_owned());
    }
    if args.timeout.as_duration() != Duration::from_millis(500) {
        return Err("Expected timeout from config".to_owned());
    }
    if !args.no_progress {
        return Err("Expected no_progress from config".to_owned());
    }
    Ok(())
}

#[test]
fn config_rejects_non_positive_values() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["volley"])?;
    let zero_requests = ConfigFile {
        requests: Some(0),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &zero_requests).is_ok() {
        return Err("Expected zero requests to fail".to_owned());
    }

    let negative_timeout = ConfigFile {
        timeout: Some(-1.0),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &negative_timeout).is_ok() {
        return Err("Expected negative timeout to fail".to_owned());
    }
    Ok(())
}

#[test]
fn config_format_follows_extension() -> Result<(), String> {
    for name in DEFAULT_CONFIG_FILES {
        ConfigFormat::from_path(Path::new(name)).map_err(|err| err.to_string())?;
    }
    if ConfigFormat::from_path(Path::new("volley.json")).ok() != Some(ConfigFormat::Json) {
        return Err("Expected JSON format".to_owned());
    }
    // The extension is checked before the file is opened.
    match ConfigFormat::from_path(Path::new("missing/volley")) {
        Err(err) if err.to_string().contains("extension") => {}
        other => return Err(format!("Expected missing extension error, got {:?}", other)),
    }
    match load_config_file(Path::new("missing/volley.yaml")) {
        Err(err) if err.to_string().contains("yaml") => Ok(()),
        other => Err(format!("Expected unsupported extension error, got {:?}", other)),
    }
}

#[test]
fn explicit_config_path_is_loaded() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "requests = 7\n").map_err(|err| format!("write failed: {}", err))?;

    let config = load_config(path.to_str())
        .map_err(|err| err.to_string())?
        .ok_or_else(|| "Expected a config".to_owned())?;
    if config.requests != Some(7) {
        return Err(format!("Unexpected config: {:?}", config));
    }
    Ok(())
}

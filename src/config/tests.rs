use super::types::{ConfigFile, DurationValue};
use super::{apply_config, load_config, load_config_file};
use crate::args::{CliArgs, Command, HttpMethod, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

fn run_matches(argv: &[&str]) -> AppResult<(TesterArgs, ArgMatches)> {
    let matches = CliArgs::command().try_get_matches_from(argv)?;
    let cli = CliArgs::from_arg_matches(&matches)?;
    let Command::Run(args) = cli.command;
    let run_matches = matches
        .subcommand_matches("run")
        .cloned()
        .ok_or_else(|| AppError::config("Expected run subcommand matches"))?;
    Ok((args, run_matches))
}

#[test]
fn parse_toml_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("g0.toml");
    let content = r#"
url = "http://localhost:3000"
method = "post"
body = "{}"
headers = ["Content-Type: application/json", "X-Trace: 1"]
concurrency = 25
duration = "2m"
max_rate = 100
timeout = 3
grace = "200ms"
"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.url.as_deref() != Some("http://localhost:3000") {
        return Err(AppError::config("Unexpected url"));
    }
    if config.method != Some(HttpMethod::Post) {
        return Err(AppError::config("Unexpected method"));
    }
    if config.duration != Some(DurationValue::Text("2m".to_owned())) {
        return Err(AppError::config("Unexpected duration"));
    }
    if config.timeout != Some(DurationValue::Seconds(3)) {
        return Err(AppError::config("Unexpected timeout"));
    }
    if config.headers.as_ref().map(Vec::len) != Some(2) {
        return Err(AppError::config("Unexpected headers"));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("g0.json");
    let content = r#"{
  "url": "https://example.com",
  "concurrency": 4,
  "duration": 30,
  "connect_timeout": "750ms"
}"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.concurrency != Some(4) || config.duration != Some(DurationValue::Seconds(30)) {
        return Err(AppError::config(format!("Unexpected config: {:?}", config)));
    }
    Ok(())
}

#[test]
fn unknown_extension_is_rejected() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("g0.yaml");
    std::fs::write(&path, "url: x")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected yaml to be rejected")),
    }
}

#[test]
fn unknown_fields_are_rejected() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("g0.toml");
    std::fs::write(&path, "urll = \"http://localhost\"\n")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected typo to be rejected")),
    }
}

#[test]
fn explicit_missing_config_is_an_error() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.toml");
    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::config("Non UTF-8 temp path"))?;
    match load_config(Some(path_str)) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected missing file to fail")),
    }
}

#[test]
fn apply_config_fills_defaults() -> AppResult<()> {
    let config = ConfigFile {
        url: Some("http://from-config".to_owned()),
        method: Some(HttpMethod::Put),
        headers: Some(vec!["X-A: 1".to_owned()]),
        concurrency: Some(42),
        duration: Some(DurationValue::Text("1m".to_owned())),
        max_rate: Some(50),
        timeout: Some(DurationValue::Seconds(5)),
        connect_timeout: Some(DurationValue::Text("250ms".to_owned())),
        grace: Some(DurationValue::Text("1s".to_owned())),
        ..ConfigFile::default()
    };
    let (mut args, matches) = run_matches(&["g0", "run"])?;
    apply_config(&mut args, &matches, &config)?;

    if args.url.as_deref() != Some("http://from-config") {
        return Err(AppError::config("Unexpected url"));
    }
    if args.method != HttpMethod::Put || args.concurrency.get() != 42 {
        return Err(AppError::config("Unexpected method or concurrency"));
    }
    if args.target_duration != Duration::from_secs(60) || args.max_rate != Some(50) {
        return Err(AppError::config("Unexpected duration or rate"));
    }
    if args.request_timeout != Duration::from_secs(5)
        || args.connect_timeout != Duration::from_millis(250)
        || args.grace_period != Duration::from_secs(1)
    {
        return Err(AppError::config("Unexpected timeouts"));
    }
    if args.headers != vec![("X-A".to_owned(), "1".to_owned())] {
        return Err(AppError::config("Unexpected headers"));
    }
    Ok(())
}

#[test]
fn apply_config_respects_cli_overrides() -> AppResult<()> {
    let config = ConfigFile {
        url: Some("http://from-config".to_owned()),
        concurrency: Some(42),
        duration: Some(DurationValue::Seconds(90)),
        ..ConfigFile::default()
    };
    let (mut args, matches) = run_matches(&["g0", "run", "--url", "http://from-cli", "-c", "3"])?;
    apply_config(&mut args, &matches, &config)?;

    if args.url.as_deref() != Some("http://from-cli") {
        return Err(AppError::config("Expected CLI url to win"));
    }
    if args.concurrency.get() != 3 {
        return Err(AppError::config("Expected CLI concurrency to win"));
    }
    if args.target_duration != Duration::from_secs(90) {
        return Err(AppError::config("Expected config duration over default"));
    }
    Ok(())
}

#[test]
fn apply_config_rejects_invalid_values() -> AppResult<()> {
    let zero_workers = ConfigFile {
        concurrency: Some(0),
        ..ConfigFile::default()
    };
    let (mut args, matches) = run_matches(&["g0", "run"])?;
    match apply_config(&mut args, &matches, &zero_workers) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field, .. }))
            if field == "concurrency" => {}
        other => return Err(AppError::config(format!("Unexpected result: {:?}", other))),
    }

    let zero_duration = ConfigFile {
        duration: Some(DurationValue::Seconds(0)),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &zero_duration) {
        Err(AppError::Config(ConfigError::InvalidDuration {
            field: "duration",
            source: ValidationError::DurationZero,
        })) => {}
        other => return Err(AppError::config(format!("Unexpected result: {:?}", other))),
    }

    let bad_header = ConfigFile {
        headers: Some(vec!["no-colon".to_owned()]),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, &bad_header) {
        Err(AppError::Config(ConfigError::InvalidHeader { .. })) => Ok(()),
        other => Err(AppError::config(format!("Unexpected result: {:?}", other))),
    }
}

use super::*;

#[test]
fn parse_args_full_run_command() -> AppResult<()> {
    let args = parse_test_args([
        "g0",
        "run",
        "--url",
        "http://localhost:8080/api",
        "-c",
        "25",
        "-d",
        "1m",
        "-m",
        "post",
        "-b",
        "{\"a\":1}",
        "-r",
        "200",
        "--timeout",
        "2s",
        "--connect-timeout",
        "750ms",
        "--grace",
        "100ms",
        "--export-json",
        "out.json",
        "--no-progress",
        "--no-banner",
        "-v",
        "--no-color",
    ])?;

    if args.url.as_deref() != Some("http://localhost:8080/api") {
        return Err(AppError::validation("Unexpected url"));
    }
    if args.concurrency.get() != 25 {
        return Err(AppError::validation("Unexpected concurrency"));
    }
    if args.target_duration != Duration::from_secs(60) {
        return Err(AppError::validation("Unexpected duration"));
    }
    if args.method != HttpMethod::Post || args.body != "{\"a\":1}" {
        return Err(AppError::validation("Unexpected method or body"));
    }
    if args.max_rate != Some(200) {
        return Err(AppError::validation("Unexpected max rate"));
    }
    if args.request_timeout != Duration::from_secs(2)
        || args.connect_timeout != Duration::from_millis(750)
        || args.grace_period != Duration::from_millis(100)
    {
        return Err(AppError::validation("Unexpected timeouts"));
    }
    if args.export_json.as_deref() != Some("out.json") {
        return Err(AppError::validation("Unexpected export path"));
    }
    if !(args.no_progress && args.no_banner && args.verbose && args.no_color) {
        return Err(AppError::validation("Expected flags to be set"));
    }
    Ok(())
}

#[test]
fn method_is_case_insensitive() -> AppResult<()> {
    for (input, expected) in [
        ("GET", HttpMethod::Get),
        ("Delete", HttpMethod::Delete),
        ("head", HttpMethod::Head),
        ("OPTIONS", HttpMethod::Options),
        ("patch", HttpMethod::Patch),
        ("PUT", HttpMethod::Put),
    ] {
        let args = parse_test_args(["g0", "run", "-u", "http://localhost", "-m", input])?;
        if args.method != expected {
            return Err(AppError::validation(format!(
                "Unexpected method for {}",
                input
            )));
        }
        if args.method.as_str() != input.to_ascii_uppercase() {
            return Err(AppError::validation("Unexpected method name"));
        }
    }
    Ok(())
}

#[test]
fn zero_concurrency_is_rejected() -> AppResult<()> {
    if parse_test_args(["g0", "run", "-u", "http://localhost", "-c", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero concurrency to fail"));
    }
    Ok(())
}

#[test]
fn positive_usize_reports_minimum() -> AppResult<()> {
    match "0".parse::<PositiveUsize>() {
        Err(ValidationError::ValueTooSmall { min: 1 }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected zero to be rejected")),
    }
}

#[test]
fn mapper_requires_url() -> AppResult<()> {
    let args = parse_test_args(["g0", "run"])?;
    match to_test_config(&args) {
        Err(AppError::Validation(ValidationError::MissingUrl)) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected missing URL to fail")),
    }
}

#[test]
fn mapper_treats_zero_rate_as_unlimited() -> AppResult<()> {
    let args = parse_test_args(["g0", "run", "-u", "http://localhost", "-r", "0"])?;
    let config = to_test_config(&args)?;
    if config.max_rate.is_some() {
        return Err(AppError::validation("Expected zero rate to map to unlimited"));
    }
    if config.concurrency.get() != 10 || config.url != "http://localhost" {
        return Err(AppError::validation("Unexpected mapped config"));
    }
    Ok(())
}

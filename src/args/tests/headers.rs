use super::*;

#[test]
fn parse_header_valid() -> AppResult<()> {
    let parsed = parse_header("Content-Type: application/json");
    match parsed {
        Ok((key, value)) => {
            if key != "Content-Type" {
                return Err(AppError::validation(format!("Unexpected key: {}", key)));
            }
            if value != "application/json" {
                return Err(AppError::validation(format!("Unexpected value: {}", value)));
            }
            Ok(())
        }
        Err(err) => Err(AppError::validation(format!(
            "Expected Ok, got Err: {}",
            err
        ))),
    }
}

#[test]
fn parse_header_splits_on_first_colon_and_trims() -> AppResult<()> {
    let (key, value) = parse_header("  X-Target :  http://host:8080/path  ")
        .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;
    if key != "X-Target" {
        return Err(AppError::validation(format!("Unexpected key: {}", key)));
    }
    if value != "http://host:8080/path" {
        return Err(AppError::validation(format!("Unexpected value: {}", value)));
    }
    Ok(())
}

#[test]
fn parse_header_allows_empty_value() -> AppResult<()> {
    let (key, value) = parse_header("X-Empty:")
        .map_err(|err| AppError::validation(format!("Expected Ok, got Err: {}", err)))?;
    if key != "X-Empty" || !value.is_empty() {
        return Err(AppError::validation("Expected empty header value"));
    }
    Ok(())
}

#[test]
fn parse_header_invalid() -> AppResult<()> {
    match parse_header("MissingDelimiter") {
        Err(ValidationError::InvalidHeaderFormat { .. }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected Err for invalid header")),
    }
}

#[test]
fn parse_header_rejects_empty_name() -> AppResult<()> {
    match parse_header("  : value") {
        Err(ValidationError::HeaderNameEmpty { .. }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected Err for empty header name")),
    }
}

#[test]
fn repeated_header_flags_keep_last_value() -> AppResult<()> {
    let args = parse_test_args([
        "g0",
        "run",
        "-u",
        "http://localhost",
        "-H",
        "X-Id: 1",
        "-H",
        "Accept: */*",
        "-H",
        "X-Id: 2",
    ])?;
    if args.headers.len() != 3 {
        return Err(AppError::validation("Expected all header flags to be kept"));
    }

    let config = to_test_config(&args)?;
    if config.headers.get("X-Id").map(String::as_str) != Some("2") {
        return Err(AppError::validation("Expected later header to win"));
    }
    if config.headers.len() != 2 {
        return Err(AppError::validation("Expected two unique header keys"));
    }
    Ok(())
}

#[test]
fn header_without_colon_fails_cli_parsing() -> AppResult<()> {
    if parse_test_args(["g0", "run", "-u", "http://localhost", "-H", "bogus"]).is_ok() {
        return Err(AppError::validation("Expected malformed header to fail"));
    }
    Ok(())
}

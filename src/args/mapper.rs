use std::collections::BTreeMap;

use crate::error::{AppError, AppResult, ValidationError};
use crate::runner::TestConfig;

use super::TesterArgs;

/// Builds the run configuration from parsed arguments.
///
/// Repeated header keys keep the last value.
///
/// # Errors
///
/// Returns `ValidationError::MissingUrl` when no URL was supplied.
pub fn to_test_config(args: &TesterArgs) -> AppResult<TestConfig> {
    let Some(url) = args.url.clone() else {
        tracing::error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    };

    let mut headers = BTreeMap::new();
    for (key, value) in &args.headers {
        headers.insert(key.clone(), value.clone());
    }

    Ok(TestConfig {
        url,
        method: args.method,
        body: args.body.clone(),
        headers,
        concurrency: args.concurrency,
        duration: args.target_duration,
        max_rate: args.max_rate.filter(|rate| *rate > 0),
        request_timeout: args.request_timeout,
        connect_timeout: args.connect_timeout,
        grace_period: args.grace_period,
    })
}

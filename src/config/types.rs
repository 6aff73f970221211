use std::time::Duration;

use serde::Deserialize;

use crate::args::HttpMethod;
use crate::args::parsers::parse_duration_value;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

/// Contents of `g0.toml` / `g0.json`. Every field is optional; command-line
/// values take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<HttpMethod>,
    pub body: Option<String>,
    /// `"Key: Value"` entries.
    pub headers: Option<Vec<String>>,
    pub concurrency: Option<usize>,
    pub duration: Option<DurationValue>,
    pub max_rate: Option<u32>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub grace: Option<DurationValue>,
}

/// Either whole seconds (`30`) or text with a unit (`"500ms"`, `"2m"`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> AppResult<Duration> {
        let parsed = match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_value(text),
        };
        parsed.map_err(|source| AppError::config(ConfigError::InvalidDuration { field, source }))
    }
}

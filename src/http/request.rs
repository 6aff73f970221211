use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::args::HttpMethod;
use crate::error::{AppResult, ValidationError};
use crate::runner::TestConfig;

/// The one request every worker repeats, resolved once before the run.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl RequestSpec {
    /// # Errors
    ///
    /// Returns an error when the URL or a header cannot be used on the wire.
    pub fn from_config(config: &TestConfig) -> AppResult<Self> {
        Ok(Self {
            method: config.method,
            url: parse_target_url(&config.url)?,
            headers: build_header_map(&config.headers)?,
            body: config.body.clone(),
        })
    }
}

/// Accepts absolute `http`/`https` URLs with a host.
///
/// # Errors
///
/// Returns an error for unparsable URLs, other schemes, or a missing host.
pub fn parse_target_url(raw: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(raw.trim()).map_err(|source| ValidationError::InvalidUrl {
        url: raw.to_owned(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            });
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlMissingHost);
    }
    Ok(url)
}

/// # Errors
///
/// Returns an error for header names or values that are not valid HTTP.
pub fn build_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, ValidationError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|source| {
            ValidationError::InvalidHeaderName {
                header: key.clone(),
                source,
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|source| {
            ValidationError::InvalidHeaderValue {
                header: key.clone(),
                source,
            }
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

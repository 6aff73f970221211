use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};
use crate::metrics::RequestOutcome;

use super::RequestSpec;

/// What one request attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub latency: Duration,
    /// `0` when no response status was received.
    pub status_code: u16,
    pub error: Option<String>,
}

impl From<ExecutionResult> for RequestOutcome {
    fn from(result: ExecutionResult) -> Self {
        RequestOutcome {
            latency: result.latency,
            status_code: result.status_code,
            error: result.error,
        }
    }
}

/// Performs a single request. Never retries and never fails as a call:
/// transport problems are reported inside the result.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, request: &RequestSpec) -> ExecutionResult;
}

#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|source| {
                error!("Failed to build HTTP client: {}", source);
                AppError::http(HttpError::BuildClientFailed { source })
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Executor for ReqwestExecutor {
    async fn execute(&self, request: &RequestSpec) -> ExecutionResult {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), request.url.clone())
            .headers(request.headers.clone());
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let start = Instant::now();
        match builder.send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let error = drain_response_body(response)
                    .await
                    .err()
                    .map(|err| describe_error(&err));
                ExecutionResult {
                    latency: start.elapsed(),
                    status_code,
                    error,
                }
            }
            Err(err) => ExecutionResult {
                latency: start.elapsed(),
                status_code: 0,
                error: Some(describe_error(&err)),
            },
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

fn describe_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_owned()
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}

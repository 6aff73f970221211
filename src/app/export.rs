use std::time::Duration;

use g0::error::{AppError, AppResult, MetricsError};
use g0::metrics::Summary;
use tokio::io::AsyncWriteExt;

pub(crate) fn summary_json(summary: &Summary) -> serde_json::Value {
    let status_codes: serde_json::Map<String, serde_json::Value> = summary
        .status_counts
        .iter()
        .map(|(code, count)| (code.to_string(), serde_json::Value::from(*count)))
        .collect();

    serde_json::json!({
        "duration_ms": u64::try_from(summary.duration.as_millis()).unwrap_or(u64::MAX),
        "total_requests": summary.total_requests,
        "successful_requests": summary.successful_requests,
        "failed_requests": summary.failed_requests,
        "requests_per_sec": summary.requests_per_sec,
        "latency_ns": {
            "min": nanos(summary.min_latency),
            "avg": nanos(summary.avg_latency),
            "max": nanos(summary.max_latency),
            "p50": nanos(summary.p50_latency),
            "p90": nanos(summary.p90_latency),
            "p95": nanos(summary.p95_latency),
            "p99": nanos(summary.p99_latency)
        },
        "status_codes": status_codes
    })
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

pub(crate) async fn export_json(path: &str, summary: &Summary) -> AppResult<()> {
    let body = serde_json::to_vec_pretty(&summary_json(summary))?;
    let io_error = |source| AppError::metrics(MetricsError::Io {
        context: "json export",
        source,
    });

    let mut file = tokio::fs::File::create(path).await.map_err(io_error)?;
    file.write_all(&body).await.map_err(io_error)?;
    file.write_all(b"\n").await.map_err(io_error)?;
    file.flush().await.map_err(io_error)?;
    Ok(())
}

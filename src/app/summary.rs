use std::time::Duration;

use g0::metrics::Summary;
use g0::runner::TestConfig;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const MILLIS_PER_SEC: u128 = 1_000;

pub(crate) fn print_test_start(config: &TestConfig) {
    println!("Load Test Started");
    println!("URL: {}", config.url);
    println!("Concurrency: {}", config.concurrency.get());
    println!("Duration: {}", format_clock(config.duration));
    if let Some(rate) = config.max_rate {
        println!("Max Rate: {} req/s", rate);
    }
    println!();
}

pub(crate) fn print_summary(summary: &Summary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}

pub(crate) fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        "Results:".to_owned(),
        format!("Total Requests: {}", summary.total_requests),
        format!("Success: {}", summary.successful_requests),
        format!("Failed: {}", summary.failed_requests),
        format!("RPS: {:.1}", summary.requests_per_sec),
        String::new(),
        "Latency:".to_owned(),
        format!("  Min: {}", format_latency(summary.min_latency)),
        format!("  Avg: {}", format_latency(summary.avg_latency)),
        format!("  Max: {}", format_latency(summary.max_latency)),
        format!("  p90: {}", format_latency(summary.p90_latency)),
        format!("  p95: {}", format_latency(summary.p95_latency)),
        format!("  p99: {}", format_latency(summary.p99_latency)),
    ];

    if !summary.status_counts.is_empty() {
        lines.push(String::new());
        lines.push("Status Codes:".to_owned());
        for (code, count) in &summary.status_counts {
            lines.push(format!("  {}: {}", code, count));
        }
    }
    lines
}

/// Two decimals in the largest unit below one second; whole clock notation
/// (`1.5s`, `2m3s`) from one second up.
pub(crate) fn format_latency(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < NANOS_PER_MICRO {
        format!("{}.00ns", nanos)
    } else if nanos < NANOS_PER_MILLI {
        with_hundredths(nanos, NANOS_PER_MICRO, "µs")
    } else if nanos < NANOS_PER_MILLI.saturating_mul(MILLIS_PER_SEC) {
        with_hundredths(nanos, NANOS_PER_MILLI, "ms")
    } else {
        format_clock(duration)
    }
}

fn with_hundredths(nanos: u128, unit_nanos: u128, suffix: &str) -> String {
    let step = unit_nanos.checked_div(100).unwrap_or(1).max(1);
    let hundredths = nanos
        .saturating_add(step.checked_div(2).unwrap_or(0))
        .checked_div(step)
        .unwrap_or(0);
    format!(
        "{}.{:02}{}",
        hundredths.checked_div(100).unwrap_or(0),
        hundredths.checked_rem(100).unwrap_or(0),
        suffix
    )
}

/// Rounds to the millisecond and prints `500ms`, `10s`, `1.25s`, `1m30s`,
/// or `1h0m5s`.
pub(crate) fn format_clock(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    let millis = nanos
        .saturating_add(NANOS_PER_MILLI.checked_div(2).unwrap_or(0))
        .checked_div(NANOS_PER_MILLI)
        .unwrap_or(0);
    if millis < MILLIS_PER_SEC {
        return format!("{}ms", millis);
    }

    let total_secs = millis.checked_div(MILLIS_PER_SEC).unwrap_or(0);
    let frac_millis = millis.checked_rem(MILLIS_PER_SEC).unwrap_or(0);
    let hours = total_secs.checked_div(3_600).unwrap_or(0);
    let minutes = total_secs
        .checked_rem(3_600)
        .and_then(|rest| rest.checked_div(60))
        .unwrap_or(0);
    let secs = total_secs.checked_rem(60).unwrap_or(0);

    let mut seconds_text = secs.to_string();
    if frac_millis > 0 {
        let frac = format!("{:03}", frac_millis);
        seconds_text.push('.');
        seconds_text.push_str(frac.trim_end_matches('0'));
    }
    seconds_text.push('s');

    if hours > 0 {
        format!("{}h{}m{}", hours, minutes, seconds_text)
    } else if minutes > 0 {
        format!("{}m{}", minutes, seconds_text)
    } else {
        seconds_text
    }
}

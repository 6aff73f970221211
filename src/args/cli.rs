use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::defaults::{
    DEFAULT_CONCURRENCY, DEFAULT_CONNECT, DEFAULT_DURATION, DEFAULT_GRACE, DEFAULT_TIMEOUT,
};
use super::parsers::{parse_duration_arg, parse_header, parse_positive_usize};
use super::types::{HttpMethod, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "g0",
    version,
    about = "Minimal high-performance HTTP load tester - bounded-duration worker pool, token-bucket rate limiting, and interpolated latency percentiles."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run a load test against a URL
    Run(TesterArgs),
}

#[derive(Debug, Args, Clone)]
pub struct TesterArgs {
    /// Target URL for the load test
    #[arg(long, short)]
    pub url: Option<String>,

    /// Number of concurrent workers
    #[arg(
        long,
        short = 'c',
        default_value = DEFAULT_CONCURRENCY,
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Duration of the test (supports ms/s/m/h, bare number = seconds)
    #[arg(
        long = "duration",
        short = 'd',
        default_value = DEFAULT_DURATION,
        value_parser = parse_duration_arg
    )]
    pub target_duration: Duration,

    /// HTTP method to use
    #[arg(long, short = 'm', value_enum, ignore_case = true, default_value = "get")]
    pub method: HttpMethod,

    /// Request body
    #[arg(long, short = 'b', default_value = "")]
    pub body: String,

    /// HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long, short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Maximum requests per second across all workers (0 = unlimited)
    #[arg(long = "max-rate", short = 'r')]
    pub max_rate: Option<u32>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// TCP connect timeout (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = DEFAULT_CONNECT,
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// How long to wait for workers to stop after the deadline (supports ms/s/m/h)
    #[arg(long = "grace", default_value = DEFAULT_GRACE, value_parser = parse_duration_arg)]
    pub grace_period: Duration,

    /// Path to config file (TOML or JSON). Defaults to ./g0.toml or ./g0.json
    #[arg(long)]
    pub config: Option<String>,

    /// Write the final summary as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Disable the live progress line
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Do not print the startup banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

//! Core library for the `g0` load tester.
//!
//! A run is a fixed-duration pool of workers that repeat one HTTP request,
//! optionally throttled by a shared token bucket, while a single collector
//! task aggregates every outcome into a [`metrics::Summary`] with
//! interpolated latency percentiles. The `g0` binary adds argument parsing,
//! config files, live progress and report printing on top of
//! [`runner::LoadTest`].
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod runner;
pub mod shutdown;

//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
mod mapper;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::{CliArgs, Command, TesterArgs};
pub use defaults::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_GRACE_PERIOD, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT,
};
pub use mapper::to_test_config;
pub use parsers::{parse_duration_arg, parse_header};
pub use types::{HttpMethod, PositiveUsize};

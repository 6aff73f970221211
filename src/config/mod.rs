//! Configuration file loading and merging into CLI arguments.
mod apply;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::{load_config, load_config_file};

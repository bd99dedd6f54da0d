//! Configuration loading
//!
//! Reads the instance, field mapping, status sets and search profiles from a
//! TOML or YAML file. Command-line flags are applied on top by the CLI.

pub mod loader;

pub use loader::load_config;

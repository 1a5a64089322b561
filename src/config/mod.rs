//! Configuration module for rdkdler.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{AccountConfig, AuthConfig, Config, FfmpegConfig, HttpConfig, OutputConfig};
pub use validation::{parse_datetime, validate_account, validate_config, validate_station_id};

//! Infrastructure layer with external service adapters.

/// HTTP client for the voting backend.
pub mod api;
/// Application configuration.
pub mod config;

pub use api::{ResponseBody, VotingApiClient};
pub use config::{AppConfig, CliArgs, ConfigError, ConfigStore, LogLevel};

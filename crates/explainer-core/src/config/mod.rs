//! Configuration module for the explainer
//!
//! Handles loading and parsing of `.explainer.toml` configuration files with
//! support for environment variable expansion. Configuration is read once at
//! process start and passed down; nothing re-reads the environment
//! mid-request.

mod loader;
mod types;

pub use loader::{load_config, sample_config, ConfigError};
pub use types::{ExplainerConfig, LlmConfig, ProviderConfig};

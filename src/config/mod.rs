//! Configuration loading and types

mod loader;
mod types;

pub use loader::{load_config, ConfigError};
pub use types::{AgentmapConfig, UiConfig};

//! Configuration types for agentmap
//!
//! Defines the structure of `.agentmap.toml`. Presentation preferences
//! only - selection and simulation state are never persisted.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentmapConfig {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme variant: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Animation tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_tick_rate_ms() -> u64 {
    120
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentmapConfig::default();
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.tick_rate_ms, 120);
    }
}

//! Configuration loader
//!
//! Loads configuration from `.agentmap.toml` in the current directory or
//! the user config directory. Missing or broken config falls back to
//! defaults - preferences must never prevent the app from starting.

use super::types::AgentmapConfig;
use std::path::{Path, PathBuf};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from various sources
///
/// Priority order:
/// 1. `.agentmap.toml` in the given directory
/// 2. User-level `~/.config/agentmap/config.toml`
/// 3. Default configuration
pub fn load_config(dir: &Path) -> Result<AgentmapConfig, ConfigError> {
    let local_config = dir.join(".agentmap.toml");
    if local_config.exists() {
        return load_from_file(&local_config);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            return load_from_file(&user_config);
        }
    }

    Ok(AgentmapConfig::default())
}

/// Get user config file path
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("agentmap").join("config.toml"))
}

/// Load configuration from a specific file
fn load_from_file(path: &Path) -> Result<AgentmapConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: AgentmapConfig = toml::from_str(
            r#"
            [ui]
            theme = "light"
            tick_rate_ms = 80
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.tick_rate_ms, 80);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AgentmapConfig = toml::from_str(
            r#"
            [ui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.tick_rate_ms, 120);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AgentmapConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.theme, "dark");
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/path")).unwrap();
        assert_eq!(config.ui.theme, "dark");
    }
}

//! Error types for agentmap using thiserror
//!
//! All errors are typed - no .unwrap() or .expect() in production code.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AgentmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience Result type for agentmap
pub type Result<T> = std::result::Result<T, AgentmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: AgentmapError = io_err.into();
        assert!(matches!(err, AgentmapError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_config_display() {
        let err = AgentmapError::Config("invalid setting".to_string());
        assert_eq!(err.to_string(), "Configuration error: invalid setting");
    }
}

use thiserror::Error;

/// Errors raised while loading the console configuration.
///
/// Absent configuration values are never errors; only a file that
/// cannot be read or parsed ends up here.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Configuration I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::Parse("bad yaml".to_string());
        assert_eq!(err.to_string(), "Configuration parse error: bad yaml");

        let err = ConfigError::Io("no such file".to_string());
        assert_eq!(err.to_string(), "Configuration I/O error: no such file");
    }
}

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("model client error: {0}")]
    ModelInit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("max_tokens = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: max_tokens = 0 is out of range"
        );
    }

    #[test]
    fn tutor_error_from_config() {
        let err: TutorError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, TutorError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tutor_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TutorError = io_err.into();
        assert!(matches!(err, TutorError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn model_init_display() {
        let err = TutorError::ModelInit("OPENAI_API_KEY not set".into());
        assert_eq!(err.to_string(), "model client error: OPENAI_API_KEY not set");
    }
}

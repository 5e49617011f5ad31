/// Errors raised while loading or validating bridge configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config field {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

use crate::logging::{codes, Code};
use std::path::PathBuf;

/// Errors raised while loading, validating or saving preferences
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Invalid {setting}: min ({min}) cannot be greater than max ({max})")]
    InvalidRange {
        setting: &'static str,
        min: u64,
        max: u64,
    },

    #[error("Invalid {setting}: {value} exceeds the limit of {limit}")]
    ValueTooLarge {
        setting: &'static str,
        value: u64,
        limit: u64,
    },

    #[error("No configuration directory is available on this platform")]
    NoConfigDir,
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::Io { .. } => codes::config::CONFIG_IO_FAILURE,
            Self::Decode(_) => codes::config::CONFIG_DECODE_FAILURE,
            Self::Encode(_) => codes::config::CONFIG_ENCODE_FAILURE,
            Self::InvalidRange { .. } => codes::config::INVALID_DEFAULT_RANGE,
            Self::ValueTooLarge { .. } => codes::config::DEFAULT_VALUE_TOO_LARGE,
            Self::NoConfigDir => codes::config::CONFIG_DIR_UNAVAILABLE,
        }
    }
}

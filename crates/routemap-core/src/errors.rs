//! Error types for configuration loading and scanning.

use std::path::PathBuf;

/// Errors raised while loading `routemap.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised while walking the source tree and reading files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("source root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    Decode { path: PathBuf },
}

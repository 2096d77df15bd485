// File: crates/grid-core/src/error.rs
// Summary: Error type shared by grid construction, position generation and config loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// Spacing must be finite and strictly positive, otherwise the major scan never advances.
    #[error("invalid distance {0}: spacing must be a finite number greater than zero")]
    InvalidDistance(f64),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("unknown direction '{0}' (expected \"x\" or \"y\")")]
    UnknownDirection(String),

    #[error("failed to read config '{path}'")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, GridError>;

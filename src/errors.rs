// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Invalid trip request: {0}")]
    InvalidRequest(String),

    /// The "must go after" choices contain a cycle. Holds the locations
    /// that could not be ordered.
    #[error("Cycle detected in 'must go after' constraints: {0}")]
    PrecedenceCycle(String),

    #[error("No route satisfies the trip constraints: {0}")]
    Infeasible(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TripdagError>;

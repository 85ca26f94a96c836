//! Error types for the shapeshift tool

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the shapeshift tool
#[derive(Error, Debug)]
pub enum ShapeshiftError {
    #[error("could not load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    #[error("missing ability in stats-base: {0}")]
    MissingAbility(&'static str),

    #[error("weight entry `{name}` has no `{field}` (not on the entry or its book-meta)")]
    IncompleteEntry { name: String, field: &'static str },

    #[error("race not found in weight table: {0}")]
    RaceNotFound(String),

    #[error("race `{name}` not found in {}", path.display())]
    RaceStatsNotFound { name: String, path: PathBuf },

    #[error("weight table is empty")]
    EmptyWeightTable,
}

/// Result type alias for the shapeshift tool
pub type Result<T> = std::result::Result<T, ShapeshiftError>;

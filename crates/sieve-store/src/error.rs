//! Error types for the record store.

use std::path::PathBuf;

use thiserror::Error;

use crate::entity::TeamId;

/// Errors raised by store writes and fixture loading.
///
/// Reads and searches cannot fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A member referenced a team id that was never persisted.
    #[error("team {0} does not exist")]
    UnknownTeam(TeamId),

    /// A fixture member referenced a team name not declared in the fixture.
    #[error("fixture member references unknown team '{0}'")]
    UnknownTeamName(String),

    /// A fixture declared the same team name twice.
    #[error("fixture declares team '{0}' more than once")]
    DuplicateTeamName(String),

    /// The fixture file could not be read.
    #[error("failed to read fixtures from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON fixtures: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML fixtures: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The fixture file extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported fixture format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

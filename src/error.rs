// ABOUTME: Application-wide error types for fleetshift.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::rollout::RolloutError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("specification file not found: {0}")]
    SpecNotFound(PathBuf),

    #[error("invalid specification {path}: {source}")]
    InvalidSpec {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("rollout failed: {0}")]
    Rollout(#[from] RolloutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

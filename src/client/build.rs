// ABOUTME: Build operations trait for the GameLift capability interface.
// ABOUTME: Create and describe builds.

use async_trait::async_trait;

use super::error::ClientError;
use super::types::{BuildDetail, CreatedBuild};
use crate::config::BuildSpec;
use crate::types::BuildId;

/// Build lifecycle operations.
///
/// The create side is attempted exactly once per rollout; the describe side
/// is idempotent and safe to poll.
#[async_trait]
pub trait BuildOps: Send + Sync {
    /// Register a new build from the given specification.
    async fn create_build(&self, spec: &BuildSpec) -> Result<CreatedBuild, ClientError>;

    /// Fetch the current status of a build.
    async fn describe_build(&self, id: &BuildId) -> Result<BuildDetail, ClientError>;
}

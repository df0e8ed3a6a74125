// ABOUTME: Alias operations trait for the GameLift capability interface.
// ABOUTME: Describe and repoint the routing alias used for traffic cutover.

use async_trait::async_trait;

use super::error::ClientError;
use super::types::AliasDetail;
use crate::types::{AliasId, FleetId};

/// Routing alias operations.
#[async_trait]
pub trait AliasOps: Send + Sync {
    /// Fetch an alias, or `None` if it does not exist.
    async fn describe_alias(&self, id: &AliasId) -> Result<Option<AliasDetail>, ClientError>;

    /// Repoint the alias at `target` with a simple routing strategy.
    ///
    /// This is the cutover: a single call, attempted exactly once. On
    /// failure the alias keeps routing to the old fleet, so no partial
    /// traffic shift can occur.
    async fn update_alias(&self, id: &AliasId, target: &FleetId) -> Result<(), ClientError>;
}

// ABOUTME: Game session operations trait for the GameLift capability interface.
// ABOUTME: Session listing backs the drain monitor; only the count is consumed.

use async_trait::async_trait;

use super::error::ClientError;
use super::types::GameSession;
use crate::types::FleetId;

/// Game session queries.
#[async_trait]
pub trait GameSessionOps: Send + Sync {
    /// List live game sessions on a fleet.
    async fn describe_game_sessions(&self, fleet: &FleetId)
    -> Result<Vec<GameSession>, ClientError>;
}

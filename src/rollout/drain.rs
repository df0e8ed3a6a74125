// ABOUTME: Drain monitor for the retiring fleet.
// ABOUTME: Polls the live game-session count until it reaches zero.

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::client::GameSessionOps;
use crate::types::FleetId;

use super::error::RolloutError;
use super::poll::{PollPolicy, Ticker};

/// Block until the fleet has zero live game sessions.
///
/// Sessions can run arbitrarily long, so the default policy is unbounded;
/// the deadline and cancellation plumbing still applies when the caller
/// asks for it.
pub async fn wait_for_drain<C: GameSessionOps + ?Sized>(
    client: &C,
    id: &FleetId,
    policy: &PollPolicy,
    cancel: &CancellationToken,
) -> Result<(), RolloutError> {
    let ticker = Ticker::new(policy, cancel);
    loop {
        ticker
            .tick()
            .await
            .map_err(|e| RolloutError::from_wait(e, format!("fleet {id} to drain")))?;

        let sessions = client.describe_game_sessions(id).await?;
        info!(fleet = %id, sessions = sessions.len(), "polled game sessions");

        if sessions.is_empty() {
            return Ok(());
        }
    }
}

// ABOUTME: Two-phase activation wait for a newly created fleet.
// ABOUTME: Phase 1 polls overall fleet status; phase 2 converges every location.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::client::FleetOps;
use crate::types::{FleetId, FleetStatus};

use super::error::RolloutError;
use super::locations::LocationReadinessTracker;
use super::poll::{PollPolicy, Ticker};

/// Block until the fleet and all of its locations are ACTIVE.
///
/// Both phases share one ticker, so the policy timeout bounds the whole
/// wait, not each phase separately.
///
/// # Errors
///
/// `FleetProvisioningFailed` on fleet ERROR, `UnexpectedFleetStatus` on
/// DELETING/TERMINATED, `LocationFailed` on any location ERROR,
/// `FleetNotFound` if the attribute collection comes back empty mid-poll,
/// plus the usual timeout/abort/client failures.
pub async fn wait_for_fleet_active<C: FleetOps + ?Sized>(
    client: &C,
    id: &FleetId,
    policy: &PollPolicy,
    cancel: &CancellationToken,
) -> Result<(), RolloutError> {
    let ticker = Ticker::new(policy, cancel);

    // Phase 1: overall fleet status.
    loop {
        ticker
            .tick()
            .await
            .map_err(|e| RolloutError::from_wait(e, format!("fleet {id} to be ACTIVE")))?;

        let attributes = client.describe_fleet_attributes(id).await?;
        let Some(record) = attributes.first() else {
            return Err(RolloutError::FleetNotFound(id.clone()));
        };

        match record.status {
            FleetStatus::Active => break,
            FleetStatus::Error => {
                return Err(RolloutError::FleetProvisioningFailed { fleet: id.clone() });
            }
            FleetStatus::Deleting | FleetStatus::Terminated => {
                return Err(RolloutError::UnexpectedFleetStatus {
                    fleet: id.clone(),
                    status: record.status,
                });
            }
            status => {
                info!(fleet = %id, %status, "fleet still pending");
            }
        }
    }

    // Phase 2: every location must also report ACTIVE.
    let initial = client.describe_fleet_location_attributes(id, None).await?;
    let mut tracker = LocationReadinessTracker::new(id.clone(), &initial)?;
    debug!(fleet = %id, pending = tracker.pending_len(), "seeded location pending set");

    while !tracker.is_converged() {
        ticker
            .tick()
            .await
            .map_err(|e| RolloutError::from_wait(e, format!("locations of fleet {id} to be ACTIVE")))?;

        let pending = tracker.pending();
        let records = client
            .describe_fleet_location_attributes(id, Some(&pending))
            .await?;
        tracker.observe(&records)?;
        info!(fleet = %id, pending = tracker.pending_len(), "waiting on locations");
    }

    Ok(())
}

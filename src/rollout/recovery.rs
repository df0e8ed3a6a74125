// ABOUTME: Failure policy applied when a rollout dies before cutover.
// ABOUTME: Optionally deletes the just-created fleet; builds are always kept.

use tracing::warn;

use crate::client::FleetOps;
use crate::types::FleetId;

/// What to do with a partially provisioned fleet after a failed rollout.
///
/// The default keeps it: a half-activated fleet is often exactly what an
/// operator wants to inspect, and deleting it automatically destroys that
/// evidence. Builds are never auto-deleted; the client surface has no build
/// deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Leave the created fleet in place for inspection.
    #[default]
    Retain,
    /// Best-effort delete of the created fleet.
    DeleteFleet,
}

/// Apply the failure policy after a pre-cutover failure.
///
/// Best effort: a delete failure is logged, not propagated, so it never
/// masks the original rollout error. Must not be called once the alias has
/// been cut over; at that point the new fleet is serving traffic.
pub async fn abandon<C: FleetOps + ?Sized>(
    client: &C,
    created_fleet: Option<&FleetId>,
    policy: FailurePolicy,
) {
    let Some(fleet) = created_fleet else { return };

    match policy {
        FailurePolicy::Retain => {
            warn!(fleet = %fleet, "leaving partially provisioned fleet in place");
        }
        FailurePolicy::DeleteFleet => match client.delete_fleet(fleet).await {
            Ok(()) => warn!(fleet = %fleet, "deleted partially provisioned fleet"),
            Err(e) => {
                warn!(fleet = %fleet, error = %e, "failed to delete partially provisioned fleet");
            }
        },
    }
}

// ABOUTME: Precondition checks run before any resource is created.
// ABOUTME: Read-only, no retries; failure here aborts with nothing to clean up.

use tracing::debug;

use crate::client::{AliasOps, ClientErrorKind, FleetOps};
use crate::types::{AliasId, FleetId};

use super::error::RolloutError;

/// Confirm the fleet being replaced exists.
///
/// An empty attribute collection (or a service-side not-found) means it
/// does not.
///
/// # Errors
///
/// `RolloutError::FleetNotFound` if absent; any other client failure
/// propagates unchanged.
pub async fn validate_fleet_exists<C: FleetOps + ?Sized>(
    client: &C,
    id: &FleetId,
) -> Result<(), RolloutError> {
    debug!(fleet = %id, "validating fleet exists");
    let attributes = match client.describe_fleet_attributes(id).await {
        Ok(attributes) => attributes,
        Err(e) if e.kind() == ClientErrorKind::NotFound => {
            return Err(RolloutError::FleetNotFound(id.clone()));
        }
        Err(e) => return Err(e.into()),
    };

    if attributes.is_empty() {
        return Err(RolloutError::FleetNotFound(id.clone()));
    }
    Ok(())
}

/// Confirm the routing alias exists.
///
/// # Errors
///
/// `RolloutError::AliasNotFound` if absent.
pub async fn validate_alias_exists<C: AliasOps + ?Sized>(
    client: &C,
    id: &AliasId,
) -> Result<(), RolloutError> {
    debug!(alias = %id, "validating alias exists");
    match client.describe_alias(id).await? {
        Some(_) => Ok(()),
        None => Err(RolloutError::AliasNotFound(id.clone())),
    }
}

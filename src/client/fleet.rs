// ABOUTME: Fleet operations trait for the GameLift capability interface.
// ABOUTME: Create, describe (fleet-wide and per-location), and delete fleets.

use async_trait::async_trait;

use super::error::ClientError;
use super::types::{FleetAttributes, LocationAttributes};
use crate::config::FleetSpec;
use crate::types::{BuildId, FleetId, LocationCode};

/// Fleet lifecycle operations.
#[async_trait]
pub trait FleetOps: Send + Sync {
    /// Provision a new fleet from the given specification, running `build`.
    ///
    /// The build id is passed explicitly rather than read from the document:
    /// the rollout always deploys the build it just created.
    async fn create_fleet(&self, spec: &FleetSpec, build: &BuildId)
    -> Result<FleetId, ClientError>;

    /// Fetch fleet attribute records.
    ///
    /// An empty collection means the fleet does not exist.
    async fn describe_fleet_attributes(
        &self,
        id: &FleetId,
    ) -> Result<Vec<FleetAttributes>, ClientError>;

    /// Fetch per-location readiness for a fleet.
    ///
    /// `locations: None` asks for every location the fleet deploys into;
    /// `Some(..)` restricts the response to the given subset.
    async fn describe_fleet_location_attributes(
        &self,
        id: &FleetId,
        locations: Option<&[LocationCode]>,
    ) -> Result<Vec<LocationAttributes>, ClientError>;

    /// Delete a fleet. The fleet must have no active game sessions.
    async fn delete_fleet(&self, id: &FleetId) -> Result<(), ClientError>;
}

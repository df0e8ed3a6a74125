// ABOUTME: Generic rollout struct parameterized by state marker.
// ABOUTME: Validation is the only entry point, so no mutation precedes it.

use std::marker::PhantomData;

use crate::client::{AliasOps, FleetOps};
use crate::types::{AliasId, BuildId, FleetId};

use super::error::RolloutError;
use super::preconditions;
use super::state::{Completed, Validated};

/// A rollout in progress, parameterized by its current state.
///
/// The state type parameter `S` restricts which transitions are callable,
/// so the fixed phase order of the rollout is enforced at compile time:
/// the alias cannot be cut over before the fleet is active, the old fleet
/// cannot be deleted before it drains, and no phase can be re-entered.
#[derive(Debug)]
pub struct Rollout<S> {
    pub(crate) previous_fleet: FleetId,
    pub(crate) alias: AliasId,
    pub(crate) new_build: Option<BuildId>,
    pub(crate) new_fleet: Option<FleetId>,
    pub(crate) _state: PhantomData<S>,
}

impl Rollout<Validated> {
    /// Check preconditions and begin a rollout.
    ///
    /// Both the retiring fleet and the alias must exist before anything is
    /// created. This is the only constructor, which makes "mutate before
    /// validating" unrepresentable.
    ///
    /// # Errors
    ///
    /// `FleetNotFound` / `AliasNotFound` if either is absent.
    pub async fn validate<C: FleetOps + AliasOps + ?Sized>(
        client: &C,
        previous_fleet: FleetId,
        alias: AliasId,
    ) -> Result<Self, RolloutError> {
        preconditions::validate_fleet_exists(client, &previous_fleet).await?;
        preconditions::validate_alias_exists(client, &alias).await?;

        Ok(Rollout {
            previous_fleet,
            alias,
            new_build: None,
            new_fleet: None,
            _state: PhantomData,
        })
    }
}

impl<S> Rollout<S> {
    /// The fleet being replaced.
    pub fn previous_fleet(&self) -> &FleetId {
        &self.previous_fleet
    }

    /// The routing alias that will be (or was) cut over.
    pub fn alias(&self) -> &AliasId {
        &self.alias
    }

    /// The build created by this rollout, once it exists.
    pub fn new_build(&self) -> Option<&BuildId> {
        self.new_build.as_ref()
    }

    /// The fleet created by this rollout, once it exists.
    pub fn new_fleet(&self) -> Option<&FleetId> {
        self.new_fleet.as_ref()
    }
}

/// Final report of a finished rollout.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RolloutOutcome {
    pub previous_fleet: FleetId,
    pub new_build: BuildId,
    pub new_fleet: FleetId,
}

impl Rollout<Completed> {
    /// Consume the rollout and return what it produced.
    pub fn finish(self) -> RolloutOutcome {
        RolloutOutcome {
            previous_fleet: self.previous_fleet,
            new_build: self
                .new_build
                .expect("completed rollout must have created a build"),
            new_fleet: self
                .new_fleet
                .expect("completed rollout must have created a fleet"),
        }
    }
}

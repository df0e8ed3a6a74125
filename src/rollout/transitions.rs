// ABOUTME: State transition methods for rollout orchestration.
// ABOUTME: Each method consumes self and returns the next state on success.

use std::marker::PhantomData;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::client::{AliasOps, BuildOps, FleetOps, GameSessionOps};
use crate::config::{BuildSpec, FleetSpec};

use super::Rollout;
use super::build_wait::wait_for_build_ready;
use super::drain::wait_for_drain;
use super::error::RolloutError;
use super::fleet_wait::wait_for_fleet_active;
use super::poll::PollPolicy;
use super::state::{BuildReady, Completed, CutOver, Drained, FleetActive, Validated};

/// Result type for transitions that may need failure recovery.
///
/// On failure the rollout comes back alongside the error, so the caller can
/// inspect what was already created and apply its failure policy.
pub type TransitionResult<T, S> = Result<Rollout<T>, (Rollout<S>, RolloutError)>;

impl<S> Rollout<S> {
    /// Internal helper to transition to a new state.
    fn transition<T>(self) -> Rollout<T> {
        Rollout {
            previous_fleet: self.previous_fleet,
            alias: self.alias,
            new_build: self.new_build,
            new_fleet: self.new_fleet,
            _state: PhantomData,
        }
    }
}

// =============================================================================
// Validated -> BuildReady
// =============================================================================

impl Rollout<Validated> {
    /// Create the new build and wait for it to be READY.
    ///
    /// # Errors
    ///
    /// Returns `(self, error)` on failure; the created build id, if any,
    /// stays recorded on the returned rollout for diagnostics.
    #[must_use = "rollout state must be used"]
    pub async fn provision_build<C: BuildOps + ?Sized>(
        mut self,
        client: &C,
        spec: &BuildSpec,
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> TransitionResult<BuildReady, Validated> {
        let created = match client.create_build(spec).await {
            Ok(created) => created,
            Err(e) => return Err((self, e.into())),
        };
        info!(build = %created.id, status = %created.status, "build created");
        self.new_build = Some(created.id.clone());

        match wait_for_build_ready(client, &created.id, policy, cancel).await {
            Ok(()) => Ok(self.transition()),
            Err(e) => Err((self, e)),
        }
    }
}

// =============================================================================
// BuildReady -> FleetActive
// =============================================================================

impl Rollout<BuildReady> {
    /// Create the new fleet against the freshly created build and wait for
    /// the fleet and all of its locations to be ACTIVE.
    ///
    /// A `BuildId` present in the fleet document is overridden: a rollout
    /// always deploys the build it just provisioned.
    ///
    /// # Errors
    ///
    /// Returns `(self, error)` on failure; the created fleet id, if any,
    /// stays recorded so recovery can delete it.
    #[must_use = "rollout state must be used"]
    pub async fn provision_fleet<C: FleetOps + ?Sized>(
        mut self,
        client: &C,
        spec: &FleetSpec,
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> TransitionResult<FleetActive, BuildReady> {
        let build = self
            .new_build
            .as_ref()
            .expect("build must exist after provision_build")
            .clone();

        if let Some(document_build) = &spec.build_id
            && document_build != build.as_str()
        {
            debug!(
                document_build = %document_build,
                build = %build,
                "overriding BuildId from fleet document with the freshly created build"
            );
        }

        let fleet = match client.create_fleet(spec, &build).await {
            Ok(fleet) => fleet,
            Err(e) => return Err((self, e.into())),
        };
        info!(fleet = %fleet, build = %build, "fleet created");
        self.new_fleet = Some(fleet.clone());

        match wait_for_fleet_active(client, &fleet, policy, cancel).await {
            Ok(()) => Ok(self.transition()),
            Err(e) => Err((self, e)),
        }
    }
}

// =============================================================================
// FleetActive -> CutOver
// =============================================================================

impl Rollout<FleetActive> {
    /// Repoint the alias at the new fleet.
    ///
    /// A single external call, attempted exactly once per rollout. On
    /// failure the alias still routes to the old fleet, so no partial
    /// traffic shift can occur.
    #[must_use = "rollout state must be used"]
    pub async fn cutover<C: AliasOps + ?Sized>(
        self,
        client: &C,
    ) -> TransitionResult<CutOver, FleetActive> {
        let target = self
            .new_fleet
            .as_ref()
            .expect("fleet must exist after provision_fleet")
            .clone();

        match client.update_alias(&self.alias, &target).await {
            Ok(()) => {
                info!(
                    alias = %self.alias,
                    from = %self.previous_fleet,
                    to = %target,
                    "alias cut over"
                );
                Ok(self.transition())
            }
            Err(e) => Err((self, e.into())),
        }
    }
}

// =============================================================================
// CutOver -> Drained
// =============================================================================

impl Rollout<CutOver> {
    /// Wait for the retiring fleet to reach zero live game sessions.
    ///
    /// New sessions already route to the new fleet; this only waits out the
    /// matches still running on the old one.
    #[must_use = "rollout state must be used"]
    pub async fn drain_previous<C: GameSessionOps + ?Sized>(
        self,
        client: &C,
        policy: &PollPolicy,
        cancel: &CancellationToken,
    ) -> TransitionResult<Drained, CutOver> {
        match wait_for_drain(client, &self.previous_fleet, policy, cancel).await {
            Ok(()) => Ok(self.transition()),
            Err(e) => Err((self, e)),
        }
    }
}

// =============================================================================
// Drained -> Completed
// =============================================================================

impl Rollout<Drained> {
    /// Delete the drained retiring fleet.
    #[must_use = "rollout state must be used"]
    pub async fn retire_previous<C: FleetOps + ?Sized>(
        self,
        client: &C,
    ) -> TransitionResult<Completed, Drained> {
        match client.delete_fleet(&self.previous_fleet).await {
            Ok(()) => {
                info!(fleet = %self.previous_fleet, "previous fleet deleted");
                Ok(self.transition())
            }
            Err(e) => Err((self, e.into())),
        }
    }
}

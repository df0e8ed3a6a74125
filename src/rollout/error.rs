// ABOUTME: Error types for rollout orchestration.
// ABOUTME: Covers validation, provisioning, cutover, drain, and wait failures.

use crate::client::ClientError;
use crate::types::{AliasId, BuildId, FleetId, FleetStatus, LocationCode};

use super::poll::WaitError;

/// Errors that can occur while driving a rollout.
#[derive(Debug, thiserror::Error)]
pub enum RolloutError {
    /// The fleet being replaced does not exist.
    #[error("fleet {0} was not found")]
    FleetNotFound(FleetId),

    /// The alias to cut over does not exist.
    #[error("alias {0} was not found")]
    AliasNotFound(AliasId),

    /// The new build ended in FAILED instead of READY.
    #[error("build {build} failed to reach READY (status FAILED)")]
    BuildFailed { build: BuildId },

    /// The new fleet went into ERROR while activating.
    #[error("fleet {fleet} went into ERROR during provisioning")]
    FleetProvisioningFailed { fleet: FleetId },

    /// The fleet reached a terminal status that makes no sense mid-provision.
    #[error("fleet {fleet} unexpectedly reported {status} while activating")]
    UnexpectedFleetStatus { fleet: FleetId, status: FleetStatus },

    /// One deployment location went into ERROR; the fleet will never converge.
    #[error("location {location} of fleet {fleet} went into ERROR")]
    LocationFailed {
        fleet: FleetId,
        location: LocationCode,
    },

    /// A wait exceeded its deadline.
    #[error("timed out after {after_secs}s waiting for {waiting_for}")]
    TimedOut {
        waiting_for: String,
        after_secs: u64,
    },

    /// A wait was cancelled by the operator.
    #[error("aborted while waiting for {waiting_for}")]
    Aborted { waiting_for: String },

    /// An API call failed; the rollout stops where it stands.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl RolloutError {
    /// Attach the wait description to a low-level wait failure.
    pub(crate) fn from_wait(err: WaitError, waiting_for: impl Into<String>) -> Self {
        match err {
            WaitError::TimedOut { after } => RolloutError::TimedOut {
                waiting_for: waiting_for.into(),
                after_secs: after.as_secs(),
            },
            WaitError::Aborted => RolloutError::Aborted {
                waiting_for: waiting_for.into(),
            },
        }
    }
}

// ABOUTME: Rollout orchestration using the type state pattern.
// ABOUTME: Exports state markers, waits, polling policy, and the Rollout struct.

mod build_wait;
mod drain;
mod error;
mod fleet_wait;
mod locations;
mod poll;
mod preconditions;
mod recovery;
#[allow(clippy::module_inception)]
mod rollout;
mod state;
mod transitions;

pub use build_wait::wait_for_build_ready;
pub use drain::wait_for_drain;
pub use error::RolloutError;
pub use fleet_wait::wait_for_fleet_active;
pub use locations::LocationReadinessTracker;
pub use poll::{PollPolicy, Ticker, WaitError};
pub use preconditions::{validate_alias_exists, validate_fleet_exists};
pub use recovery::{FailurePolicy, abandon};
pub use rollout::{Rollout, RolloutOutcome};
pub use state::{BuildReady, Completed, CutOver, Drained, FleetActive, Validated};
pub use transitions::TransitionResult;

// ABOUTME: Capability traits for the managed game-server API.
// ABOUTME: Defines BuildOps, FleetOps, AliasOps, GameSessionOps and the GameLift binding.

mod alias;
mod build;
mod error;
mod fleet;
mod gamelift;
mod session;
mod types;

pub use alias::AliasOps;
pub use build::BuildOps;
pub use error::{ClientError, ClientErrorKind};
pub use fleet::FleetOps;
pub use gamelift::GameLiftClient;
pub use session::GameSessionOps;
pub use types::{
    AliasDetail, BuildDetail, CreatedBuild, FleetAttributes, GameSession, LocationAttributes,
};

/// Everything a rollout needs from the remote API, as one bound.
///
/// Blanket-implemented, so any type with the four capability traits
/// qualifies, including test fakes.
pub trait ResourceClient: BuildOps + FleetOps + AliasOps + GameSessionOps {}

impl<T: BuildOps + FleetOps + AliasOps + GameSessionOps> ResourceClient for T {}

// ABOUTME: Shared response types for the GameLift capability traits.
// ABOUTME: Thin domain structs decoupled from the SDK's generated shapes.

use crate::types::{AliasId, BuildId, BuildStatus, FleetId, FleetStatus, GameSessionId, LocationCode, LocationStatus};

/// Result of a successful CreateBuild call.
#[derive(Debug, Clone)]
pub struct CreatedBuild {
    pub id: BuildId,
    pub status: BuildStatus,
}

/// Current state of a build, as reported by DescribeBuild.
#[derive(Debug, Clone)]
pub struct BuildDetail {
    pub id: BuildId,
    pub status: BuildStatus,
}

/// One fleet attribute record from DescribeFleetAttributes.
///
/// The describe call returns a collection; an empty collection means the
/// fleet does not exist.
#[derive(Debug, Clone)]
pub struct FleetAttributes {
    pub id: FleetId,
    pub status: FleetStatus,
}

/// Per-location readiness from DescribeFleetLocationAttributes.
#[derive(Debug, Clone)]
pub struct LocationAttributes {
    pub location: LocationCode,
    pub status: LocationStatus,
}

/// Routing alias state from DescribeAlias.
#[derive(Debug, Clone)]
pub struct AliasDetail {
    pub id: AliasId,
    pub target_fleet: Option<FleetId>,
}

/// A live game session. Only the count is consumed by the rollout.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: GameSessionId,
}

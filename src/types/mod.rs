// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod location;
mod status;

pub use id::{AliasId, BuildId, FleetId, GameSessionId, Id};
pub use location::{LocationCode, LocationCodeError};
pub use status::{BuildStatus, FleetStatus, LocationStatus, UnknownStatus};

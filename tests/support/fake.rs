// ABOUTME: Scripted in-memory client implementing the capability traits.
// ABOUTME: Counts describe calls and logs writes so tests can assert exact behavior.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use fleetshift::client::{
    AliasDetail, AliasOps, BuildDetail, BuildOps, ClientError, CreatedBuild, FleetAttributes,
    FleetOps, GameSession, GameSessionOps, LocationAttributes,
};
use fleetshift::config::{BuildSpec, FleetSpec};
use fleetshift::types::{
    AliasId, BuildId, BuildStatus, FleetId, FleetStatus, GameSessionId, LocationCode,
    LocationStatus,
};

pub const NEW_BUILD_ID: &str = "build-new-0001";
pub const NEW_FLEET_ID: &str = "fleet-new-0001";

/// Record of one write-side call, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCall {
    CreateBuild { name: String },
    CreateFleet { name: String, build: String },
    UpdateAlias { alias: String, target: String },
    DeleteFleet { fleet: String },
}

/// Scripted fake of the GameLift capability traits.
///
/// Describe responses are consumed from per-resource queues, one entry per
/// call, so a test scripts exactly the status sequence it wants observed.
/// Fleets listed in `static_fleets` always describe as ACTIVE (used for the
/// precondition check on the fleet being replaced).
#[derive(Debug, Default)]
pub struct FakeGameLift {
    pub alias_present: bool,
    pub static_fleets: Vec<String>,

    build_statuses: Mutex<VecDeque<BuildStatus>>,
    fleet_statuses: Mutex<VecDeque<FleetStatus>>,
    location_polls: Mutex<VecDeque<Vec<LocationAttributes>>>,
    session_counts: Mutex<VecDeque<usize>>,

    pub describe_build_calls: AtomicUsize,
    pub describe_fleet_calls: AtomicUsize,
    pub describe_location_calls: AtomicUsize,
    pub describe_session_calls: AtomicUsize,

    location_filters: Mutex<Vec<Option<Vec<LocationCode>>>>,
    writes: Mutex<Vec<WriteCall>>,
}

impl FakeGameLift {
    pub fn new() -> Self {
        Self {
            alias_present: true,
            ..Self::default()
        }
    }

    pub fn script_build_statuses(&self, statuses: impl IntoIterator<Item = BuildStatus>) {
        self.build_statuses.lock().unwrap().extend(statuses);
    }

    pub fn script_fleet_statuses(&self, statuses: impl IntoIterator<Item = FleetStatus>) {
        self.fleet_statuses.lock().unwrap().extend(statuses);
    }

    pub fn script_location_poll(&self, records: Vec<LocationAttributes>) {
        self.location_polls.lock().unwrap().push_back(records);
    }

    pub fn script_session_counts(&self, counts: impl IntoIterator<Item = usize>) {
        self.session_counts.lock().unwrap().extend(counts);
    }

    pub fn writes(&self) -> Vec<WriteCall> {
        self.writes.lock().unwrap().clone()
    }

    /// Location filters seen, in order; `None` is the unfiltered seed query.
    pub fn location_filters(&self) -> Vec<Option<Vec<LocationCode>>> {
        self.location_filters.lock().unwrap().clone()
    }
}

/// Shorthand for building scripted location responses.
pub fn location(code: &str, status: LocationStatus) -> LocationAttributes {
    LocationAttributes {
        location: LocationCode::new(code).unwrap(),
        status,
    }
}

#[async_trait]
impl BuildOps for FakeGameLift {
    async fn create_build(&self, spec: &BuildSpec) -> Result<CreatedBuild, ClientError> {
        self.writes.lock().unwrap().push(WriteCall::CreateBuild {
            name: spec.name.clone(),
        });
        Ok(CreatedBuild {
            id: BuildId::new(NEW_BUILD_ID),
            status: BuildStatus::Initialized,
        })
    }

    async fn describe_build(&self, id: &BuildId) -> Result<BuildDetail, ClientError> {
        self.describe_build_calls.fetch_add(1, Ordering::SeqCst);
        let status = self
            .build_statuses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::NotFound {
                resource: format!("build {id} (script exhausted)"),
            })?;
        Ok(BuildDetail {
            id: id.clone(),
            status,
        })
    }
}

#[async_trait]
impl FleetOps for FakeGameLift {
    async fn create_fleet(
        &self,
        spec: &FleetSpec,
        build: &BuildId,
    ) -> Result<FleetId, ClientError> {
        self.writes.lock().unwrap().push(WriteCall::CreateFleet {
            name: spec.name.clone(),
            build: build.as_str().to_string(),
        });
        Ok(FleetId::new(NEW_FLEET_ID))
    }

    async fn describe_fleet_attributes(
        &self,
        id: &FleetId,
    ) -> Result<Vec<FleetAttributes>, ClientError> {
        self.describe_fleet_calls.fetch_add(1, Ordering::SeqCst);

        if self.static_fleets.iter().any(|f| f == id.as_str()) {
            return Ok(vec![FleetAttributes {
                id: id.clone(),
                status: FleetStatus::Active,
            }]);
        }

        match self.fleet_statuses.lock().unwrap().pop_front() {
            Some(status) => Ok(vec![FleetAttributes {
                id: id.clone(),
                status,
            }]),
            // Empty collection means not-found, exactly like the real API.
            None => Ok(vec![]),
        }
    }

    async fn describe_fleet_location_attributes(
        &self,
        _id: &FleetId,
        locations: Option<&[LocationCode]>,
    ) -> Result<Vec<LocationAttributes>, ClientError> {
        self.describe_location_calls.fetch_add(1, Ordering::SeqCst);
        self.location_filters
            .lock()
            .unwrap()
            .push(locations.map(<[LocationCode]>::to_vec));
        Ok(self
            .location_polls
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn delete_fleet(&self, id: &FleetId) -> Result<(), ClientError> {
        self.writes.lock().unwrap().push(WriteCall::DeleteFleet {
            fleet: id.as_str().to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl AliasOps for FakeGameLift {
    async fn describe_alias(&self, id: &AliasId) -> Result<Option<AliasDetail>, ClientError> {
        if self.alias_present {
            Ok(Some(AliasDetail {
                id: id.clone(),
                target_fleet: None,
            }))
        } else {
            Ok(None)
        }
    }

    async fn update_alias(&self, id: &AliasId, target: &FleetId) -> Result<(), ClientError> {
        self.writes.lock().unwrap().push(WriteCall::UpdateAlias {
            alias: id.as_str().to_string(),
            target: target.as_str().to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl GameSessionOps for FakeGameLift {
    async fn describe_game_sessions(
        &self,
        fleet: &FleetId,
    ) -> Result<Vec<GameSession>, ClientError> {
        self.describe_session_calls.fetch_add(1, Ordering::SeqCst);
        let count = self
            .session_counts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::NotFound {
                resource: format!("fleet {fleet} (session script exhausted)"),
            })?;
        Ok((0..count)
            .map(|i| GameSession {
                id: GameSessionId::new(format!("gsess-{i}")),
            })
            .collect())
    }
}

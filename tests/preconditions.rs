// ABOUTME: Integration tests for the fleet and alias existence preconditions.
// ABOUTME: Both checks run before any resource is created.

mod support;

use fleetshift::rollout::{RolloutError, validate_alias_exists, validate_fleet_exists};
use fleetshift::types::{AliasId, FleetId};

use support::fake::FakeGameLift;

#[tokio::test]
async fn existing_fleet_passes_validation() {
    support::init_tracing();
    let mut fake = FakeGameLift::new();
    fake.static_fleets.push("fleet-old-1".to_string());

    validate_fleet_exists(&fake, &FleetId::new("fleet-old-1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_fleet_fails_validation() {
    support::init_tracing();
    let fake = FakeGameLift::new();

    let err = validate_fleet_exists(&fake, &FleetId::new("fleet-missing"))
        .await
        .unwrap_err();

    match err {
        RolloutError::FleetNotFound(id) => assert_eq!(id.as_str(), "fleet-missing"),
        other => panic!("expected FleetNotFound, got {other}"),
    }
}

#[tokio::test]
async fn existing_alias_passes_validation() {
    support::init_tracing();
    let fake = FakeGameLift::new();

    validate_alias_exists(&fake, &AliasId::new("alias-1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_alias_fails_validation() {
    support::init_tracing();
    let mut fake = FakeGameLift::new();
    fake.alias_present = false;

    let err = validate_alias_exists(&fake, &AliasId::new("alias-missing"))
        .await
        .unwrap_err();

    match err {
        RolloutError::AliasNotFound(id) => assert_eq!(id.as_str(), "alias-missing"),
        other => panic!("expected AliasNotFound, got {other}"),
    }
}

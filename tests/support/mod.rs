// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing init and the scripted fake GameLift client.

use std::sync::Once;

// Each test binary only uses some of these items, so allow dead_code.
#[allow(dead_code)]
pub mod fake;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("fleetshift=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A minimal valid build document.
#[allow(dead_code)]
pub fn test_build_spec() -> fleetshift::config::BuildSpec {
    serde_json::from_str(
        r#"{
            "Name": "test-build",
            "StorageLocation": {
                "Bucket": "test-bucket",
                "Key": "builds/server.zip",
                "RoleArn": "arn:aws:iam::123456789012:role/uploader"
            }
        }"#,
    )
    .expect("test build document should parse")
}

/// A minimal valid fleet document.
#[allow(dead_code)]
pub fn test_fleet_spec() -> fleetshift::config::FleetSpec {
    serde_json::from_str(
        r#"{
            "Name": "test-fleet",
            "EC2InstanceType": "c5.large",
            "RuntimeConfiguration": {
                "ServerProcesses": [
                    { "LaunchPath": "/local/game/server", "ConcurrentExecutions": 1 }
                ]
            }
        }"#,
    )
    .expect("test fleet document should parse")
}

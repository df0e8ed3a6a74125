// ABOUTME: Integration tests for loading build and fleet documents from disk.
// ABOUTME: Covers missing files, malformed JSON, and unknown-key rejection.

use std::io::Write;
use std::path::Path;

use fleetshift::config::{BuildSpec, FleetSpec};
use fleetshift::error::Error;

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn build_document_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "build.json",
        r#"{
            "Name": "my-server-build",
            "Version": "1.2.3",
            "OperatingSystem": "AMAZON_LINUX_2023",
            "StorageLocation": {
                "Bucket": "my-bucket",
                "Key": "builds/server.zip",
                "RoleArn": "arn:aws:iam::123456789012:role/uploader"
            }
        }"#,
    );

    let spec = BuildSpec::from_path(&path).unwrap();
    assert_eq!(spec.name, "my-server-build");
    assert_eq!(spec.version.as_deref(), Some("1.2.3"));
    assert_eq!(spec.storage_location.bucket, "my-bucket");
}

#[test]
fn fleet_document_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "fleet.json",
        r#"{
            "Name": "my-fleet",
            "EC2InstanceType": "c5.large",
            "RuntimeConfiguration": {
                "ServerProcesses": [
                    { "LaunchPath": "/local/game/server", "ConcurrentExecutions": 2 }
                ]
            }
        }"#,
    );

    let spec = FleetSpec::from_path(&path).unwrap();
    assert_eq!(spec.name, "my-fleet");
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = BuildSpec::from_path(&path).unwrap_err();
    match err {
        Error::SpecNotFound(reported) => assert_eq!(reported, path),
        other => panic!("expected SpecNotFound, got {other}"),
    }
}

#[test]
fn malformed_json_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "build.json", "{ not json");

    let err = BuildSpec::from_path(&path).unwrap_err();
    match err {
        Error::InvalidSpec { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected InvalidSpec, got {other}"),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "build.json",
        r#"{
            "Name": "my-server-build",
            "StorageLocation": {
                "Bucket": "my-bucket",
                "Key": "builds/server.zip",
                "RoleArn": "arn:aws:iam::123456789012:role/uploader"
            },
            "Nmae": "typo"
        }"#,
    );

    // A typoed key would otherwise silently deploy something unintended.
    assert!(matches!(
        BuildSpec::from_path(&path).unwrap_err(),
        Error::InvalidSpec { .. }
    ));
}

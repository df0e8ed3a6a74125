// ABOUTME: Integration tests for the fleetshift CLI.
// ABOUTME: Validates argument parsing and early exits that need no AWS access.

use assert_cmd::Command;
use predicates::prelude::*;

fn fleetshift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fleetshift"))
}

#[test]
fn help_lists_the_required_arguments() {
    fleetshift_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--fleet-id"))
        .stdout(predicate::str::contains("--alias-id"))
        .stdout(predicate::str::contains("--build-json"))
        .stdout(predicate::str::contains("--fleet-json"))
        .stdout(predicate::str::contains("--on-failure"));
}

#[test]
fn missing_arguments_are_rejected() {
    fleetshift_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--region"));
}

#[test]
fn unknown_failure_policy_is_rejected() {
    fleetshift_cmd()
        .args([
            "--region",
            "us-west-2",
            "--fleet-id",
            "fleet-1",
            "--alias-id",
            "alias-1",
            "--build-json",
            "build.json",
            "--fleet-json",
            "fleet.json",
            "--on-failure",
            "explode",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unparseable_timeout_is_rejected() {
    fleetshift_cmd()
        .args([
            "--region",
            "us-west-2",
            "--fleet-id",
            "fleet-1",
            "--alias-id",
            "alias-1",
            "--build-json",
            "build.json",
            "--fleet-json",
            "fleet.json",
            "--build-timeout",
            "soon",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--build-timeout"));
}

#[test]
fn quiet_and_json_conflict() {
    fleetshift_cmd()
        .args([
            "--region",
            "us-west-2",
            "--fleet-id",
            "fleet-1",
            "--alias-id",
            "alias-1",
            "--build-json",
            "build.json",
            "--fleet-json",
            "fleet.json",
            "--quiet",
            "--json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn json_mode_reports_errors_as_json_events() {
    let temp_dir = tempfile::tempdir().unwrap();

    fleetshift_cmd()
        .current_dir(temp_dir.path())
        .args([
            "--region",
            "us-west-2",
            "--fleet-id",
            "fleet-1",
            "--alias-id",
            "alias-1",
            "--build-json",
            "no-such-build.json",
            "--fleet-json",
            "no-such-fleet.json",
            "--json",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""event":"error""#))
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn missing_build_document_fails_before_any_network_call() {
    let temp_dir = tempfile::tempdir().unwrap();

    fleetshift_cmd()
        .current_dir(temp_dir.path())
        .args([
            "--region",
            "us-west-2",
            "--fleet-id",
            "fleet-1",
            "--alias-id",
            "alias-1",
            "--build-json",
            "no-such-build.json",
            "--fleet-json",
            "no-such-fleet.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

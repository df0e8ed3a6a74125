// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Single-purpose parser; all resource arguments are required.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use fleetshift::rollout::FailurePolicy;

#[derive(Parser)]
#[command(name = "fleetshift")]
#[command(about = "Zero-downtime rollout of a new GameLift build and fleet behind an alias")]
#[command(version)]
pub struct Cli {
    /// AWS region, e.g. us-west-2
    #[arg(short, long)]
    pub region: String,

    /// Existing fleet id being replaced, e.g. fleet-1234-5678-90
    #[arg(short, long)]
    pub fleet_id: String,

    /// Existing alias id to repoint at the new fleet, e.g. alias-1234-5678-90
    #[arg(short, long)]
    pub alias_id: String,

    /// JSON file modeling the new build resource
    #[arg(short = 'b', long)]
    pub build_json: PathBuf,

    /// JSON file modeling the new fleet resource
    #[arg(short = 'j', long)]
    pub fleet_json: PathBuf,

    /// What to do with a partially provisioned fleet if the rollout fails
    /// before cutover
    #[arg(long, value_enum, default_value_t = OnFailure::Retain)]
    pub on_failure: OnFailure,

    /// Overall bound on the build READY wait (e.g. "30m"), default 1h
    #[arg(long, value_parser = parse_duration)]
    pub build_timeout: Option<Duration>,

    /// Overall bound on the fleet ACTIVE wait (including locations), default 2h
    #[arg(long, value_parser = parse_duration)]
    pub fleet_timeout: Option<Duration>,

    /// Overall bound on the drain wait; unbounded when omitted
    #[arg(long, value_parser = parse_duration)]
    pub drain_timeout: Option<Duration>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output for CI
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// JSON lines output for scripting
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OnFailure {
    /// Leave the created fleet in place for inspection
    Retain,
    /// Best-effort delete of the created fleet
    DeleteFleet,
}

impl From<OnFailure> for FailurePolicy {
    fn from(value: OnFailure) -> Self {
        match value {
            OnFailure::Retain => FailurePolicy::Retain,
            OnFailure::DeleteFleet => FailurePolicy::DeleteFleet,
        }
    }
}

fn parse_duration(value: &str) -> Result<Duration, String> {
    humantime_serde::re::humantime::parse_duration(value).map_err(|e| e.to_string())
}

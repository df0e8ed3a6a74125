// ABOUTME: Entry point for the fleetshift CLI application.
// ABOUTME: Parses arguments, initializes tracing, and runs the deploy command.

mod cli;

use clap::Parser;
use cli::Cli;
use fleetshift::commands::deploy::{self, DeployArgs, RolloutPolicies};
use fleetshift::error::Result;
use fleetshift::output::{Output, OutputMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mode = output_mode(&cli);
    let result = run(cli, mode).await;

    if let Err(e) = result {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

fn output_mode(cli: &Cli) -> OutputMode {
    if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    }
}

async fn run(cli: Cli, mode: OutputMode) -> Result<()> {
    let output = Output::new(mode);

    let mut policies = RolloutPolicies::default();
    if let Some(timeout) = cli.build_timeout {
        policies.build = policies.build.with_timeout(timeout);
    }
    if let Some(timeout) = cli.fleet_timeout {
        policies.fleet = policies.fleet.with_timeout(timeout);
    }
    if let Some(timeout) = cli.drain_timeout {
        policies.drain = policies.drain.with_timeout(timeout);
    }

    let args = DeployArgs {
        region: cli.region,
        fleet_id: cli.fleet_id,
        alias_id: cli.alias_id,
        build_json: cli.build_json,
        fleet_json: cli.fleet_json,
        on_failure: cli.on_failure.into(),
        policies,
    };

    deploy::run(args, output).await
}

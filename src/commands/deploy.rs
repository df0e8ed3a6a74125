// ABOUTME: Deploy command implementation.
// ABOUTME: Loads spec documents, wires cancellation, and drives the rollout state machine.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::client::{GameLiftClient, ResourceClient};
use crate::config::{BuildSpec, FleetSpec};
use crate::error::Result;
use crate::output::Output;
use crate::rollout::{FailurePolicy, PollPolicy, Rollout, RolloutOutcome, abandon};
use crate::types::{AliasId, FleetId};

/// Polling policies for the three waits of a rollout.
#[derive(Debug, Clone, Copy)]
pub struct RolloutPolicies {
    pub build: PollPolicy,
    pub fleet: PollPolicy,
    pub drain: PollPolicy,
}

impl Default for RolloutPolicies {
    fn default() -> Self {
        Self {
            build: PollPolicy::build_default(),
            fleet: PollPolicy::fleet_default(),
            drain: PollPolicy::drain_default(),
        }
    }
}

/// Everything the deploy command needs, assembled from the CLI.
#[derive(Debug)]
pub struct DeployArgs {
    pub region: String,
    pub fleet_id: String,
    pub alias_id: String,
    pub build_json: PathBuf,
    pub fleet_json: PathBuf,
    pub on_failure: FailurePolicy,
    pub policies: RolloutPolicies,
}

/// Run a full rollout against the real GameLift API.
pub async fn run(args: DeployArgs, mut output: Output) -> Result<()> {
    output.start_timer();

    // Both documents must parse before any network call is made.
    output.progress(&format!(
        "Opening build json file: {}",
        args.build_json.display()
    ));
    let build_spec = BuildSpec::from_path(&args.build_json)?;
    output.progress(&format!(
        "Opening fleet json file: {}",
        args.fleet_json.display()
    ));
    let fleet_spec = FleetSpec::from_path(&args.fleet_json)?;

    let client = GameLiftClient::connect(&args.region).await;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received; aborting at the next suspension point");
                cancel.cancel();
            }
        });
    }

    let outcome = run_rollout(
        &client,
        FleetId::new(args.fleet_id),
        AliasId::new(args.alias_id),
        &build_spec,
        &fleet_spec,
        &args.policies,
        args.on_failure,
        &cancel,
        &output,
    )
    .await?;

    output.success(&format!(
        "Rollout complete: alias now routes to fleet {} (build {}); fleet {} deleted",
        outcome.new_fleet, outcome.new_build, outcome.previous_fleet
    ));
    Ok(())
}

/// Drive the rollout state machine from validation through retirement.
///
/// Generic over the capability traits so the whole sequence is testable
/// against a scripted client. Failure before cutover applies the failure
/// policy to the just-created fleet; failure after cutover never touches
/// the new fleet, which is already serving traffic.
#[allow(clippy::too_many_arguments)]
pub async fn run_rollout<C: ResourceClient + ?Sized>(
    client: &C,
    previous_fleet: FleetId,
    alias: AliasId,
    build_spec: &BuildSpec,
    fleet_spec: &FleetSpec,
    policies: &RolloutPolicies,
    on_failure: FailurePolicy,
    cancel: &CancellationToken,
    output: &Output,
) -> Result<RolloutOutcome> {
    output.progress(&format!(
        "Validating fleet {previous_fleet} and alias {alias} exist..."
    ));
    let rollout = Rollout::validate(client, previous_fleet, alias).await?;

    output.progress(&format!("Creating new build \"{}\"...", build_spec.name));
    let rollout = match rollout
        .provision_build(client, build_spec, &policies.build, cancel)
        .await
    {
        Ok(rollout) => rollout,
        Err((failed, e)) => {
            abandon(client, failed.new_fleet(), on_failure).await;
            return Err(e.into());
        }
    };
    if let Some(build) = rollout.new_build() {
        output.progress(&format!("Build {build} is READY"));
    }

    output.progress(&format!("Creating new fleet \"{}\"...", fleet_spec.name));
    let rollout = match rollout
        .provision_fleet(client, fleet_spec, &policies.fleet, cancel)
        .await
    {
        Ok(rollout) => rollout,
        Err((failed, e)) => {
            if let Some(fleet) = failed.new_fleet() {
                output.warning(&format!("rollout failed with fleet {fleet} already created"));
            }
            abandon(client, failed.new_fleet(), on_failure).await;
            return Err(e.into());
        }
    };
    if let Some(fleet) = rollout.new_fleet() {
        output.progress(&format!("Fleet {fleet} and all locations are ACTIVE"));
    }
    output.progress(
        "Note: the new fleet starts with its default capacity; review scaling before peak load",
    );

    output.progress(&format!("Cutting alias {} over...", rollout.alias()));
    let rollout = match rollout.cutover(client).await {
        Ok(rollout) => rollout,
        Err((failed, e)) => {
            // The alias still routes to the old fleet; no partial shift.
            if let Some(fleet) = failed.new_fleet() {
                output.warning(&format!("cutover failed; fleet {fleet} is not serving traffic"));
            }
            abandon(client, failed.new_fleet(), on_failure).await;
            return Err(e.into());
        }
    };

    output.progress(&format!(
        "Waiting for fleet {} to drain (this can take a long time)...",
        rollout.previous_fleet()
    ));
    let rollout = match rollout.drain_previous(client, &policies.drain, cancel).await {
        Ok(rollout) => rollout,
        Err((_, e)) => return Err(e.into()),
    };

    output.progress(&format!(
        "Deleting previous fleet {}...",
        rollout.previous_fleet()
    ));
    let rollout = match rollout.retire_previous(client).await {
        Ok(rollout) => rollout,
        Err((_, e)) => return Err(e.into()),
    };

    Ok(rollout.finish())
}

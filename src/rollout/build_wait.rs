// ABOUTME: Readiness wait for a newly created build.
// ABOUTME: Sleeps then describes until READY; FAILED is a terminal error.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::BuildOps;
use crate::types::{BuildId, BuildStatus};

use super::error::RolloutError;
use super::poll::{PollPolicy, Ticker};

/// Block until the build reaches READY.
///
/// One describe per poll interval; exactly one describe per non-terminal
/// status observed.
///
/// # Errors
///
/// `RolloutError::BuildFailed` if the build lands in FAILED, plus the usual
/// timeout/abort/client failures.
pub async fn wait_for_build_ready<C: BuildOps + ?Sized>(
    client: &C,
    id: &BuildId,
    policy: &PollPolicy,
    cancel: &CancellationToken,
) -> Result<(), RolloutError> {
    let ticker = Ticker::new(policy, cancel);
    loop {
        ticker
            .tick()
            .await
            .map_err(|e| RolloutError::from_wait(e, format!("build {id} to be READY")))?;

        let detail = client.describe_build(id).await?;
        debug!(build = %id, status = %detail.status, "polled build");

        match detail.status {
            BuildStatus::Ready => return Ok(()),
            BuildStatus::Failed => {
                return Err(RolloutError::BuildFailed { build: id.clone() });
            }
            _ => {}
        }
    }
}

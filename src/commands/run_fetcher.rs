//! Run command implementation

use tracing::debug;

use crate::{
    provision::{self, ProvisionConfig, RunOutcome, SystemRunner},
    Result,
};

/// Provision the environment and run the fetcher script.
///
/// A script that exits non-zero has already been reported by the time this
/// returns, and does not fail the command.
pub fn handle_run(config: ProvisionConfig) -> Result<()> {
    match provision::run(&config, &SystemRunner)? {
        RunOutcome::Succeeded { generated } => {
            debug!(files = generated.len(), "fetcher finished");
        }
        RunOutcome::Failed { code } => {
            debug!(?code, "fetcher failed");
        }
    }
    Ok(())
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use super::invocation::CanisterCall;
use crate::app::GatewayConfig;
use crate::utils::WalletError;

/// Seam to the external gateway tool
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Run one canister call and return the raw textual result.
    ///
    /// A non-zero exit from the tool is not an error: its stderr comes
    /// back as an `ERROR: `-marked string for display. Only a missing
    /// binary or an elapsed timeout produce an `Err`.
    async fn invoke(&self, call: &CanisterCall) -> Result<String>;
}

/// Gateway backed by the dfx CLI
pub struct DfxGateway {
    dfx_bin: String,
    network: String,
    canister_id: String,
    timeout: Duration,
}

impl DfxGateway {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            dfx_bin: config.dfx_bin.clone(),
            network: config.network.clone(),
            canister_id: config.canister_id.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl Gateway for DfxGateway {
    async fn invoke(&self, call: &CanisterCall) -> Result<String> {
        let args = call.to_dfx_args(&self.network, &self.canister_id);
        debug!("Running: {} {}", self.dfx_bin, args.join(" "));

        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.dfx_bin)
                .args(&args)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| WalletError::GatewayTimeout(self.timeout.as_secs()))?
        .with_context(|| format!("Failed to run {}", self.dfx_bin))?;

        Ok(render_result(&output))
    }
}

/// Check if the dfx binary is available on the system
pub fn is_dfx_installed(dfx_bin: &str) -> bool {
    which::which(dfx_bin).is_ok()
}

fn render_result(output: &std::process::Output) -> String {
    if output.status.success() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        format!("ERROR: {}", String::from_utf8_lossy(&output.stderr).trim())
    }
}

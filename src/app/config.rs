use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_CANISTER_ID, DEFAULT_DFX_BIN, DEFAULT_NETWORK, DFX_CALL_TIMEOUT_SECS};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gateway canister configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
        }
    }
}

/// Gateway canister settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// dfx network name ("ic" for mainnet, "local" for a local replica)
    pub network: String,
    /// Canister id of the MeneseSDK gateway
    pub canister_id: String,
    /// dfx binary to invoke (name on PATH or absolute path)
    pub dfx_bin: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            canister_id: DEFAULT_CANISTER_ID.to_string(),
            dfx_bin: DEFAULT_DFX_BIN.to_string(),
            timeout_secs: DFX_CALL_TIMEOUT_SECS,
        }
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    // Get config directories
    let config_dir = get_config_dir()?;
    let global_config = config_dir.join("config.toml");
    let local_config = PathBuf::from(".menese-wallet/config.toml");

    // Build figment configuration
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    // Add global config if it exists
    if global_config.exists() {
        figment = figment.merge(Toml::file(&global_config));
    }

    // Add local config if it exists
    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    // Add environment variables (MENESE_ prefix)
    figment = figment.merge(Env::prefixed("MENESE_"));

    // Extract and return config
    figment.extract().context("Failed to load configuration")
}

/// Load configuration from an explicit file, ignoring the layered sources
pub fn load_config_file(path: &PathBuf) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config = toml::from_str(&toml_str)
        .with_context(|| format!("Failed to parse config at {}", path.display()))?;
    Ok(config)
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "menese-wallet") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("menese-wallet");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<()> {
    let config_dir = get_config_dir()?;
    let config_file = config_dir.join("config.toml");

    if !config_file.exists() {
        let default_config = Config::default();
        save_config(&default_config, Some(config_file.clone()))?;
        println!("Created default configuration at: {}", config_file.display());
    } else {
        println!("Configuration already exists at: {}", config_file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_gateway_constants() {
        let config = Config::default();
        assert_eq!(config.gateway.network, "ic");
        assert_eq!(config.gateway.canister_id, "urs2a-ziaaa-aaaad-aembq-cai");
        assert_eq!(config.gateway.dfx_bin, "dfx");
        assert_eq!(config.gateway.timeout_secs, 120);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.gateway.canister_id, config.gateway.canister_id);
        assert_eq!(parsed.gateway.timeout_secs, config.gateway.timeout_secs);
    }

    #[test]
    fn test_load_config_file_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[gateway]\nnetwork = \"local\"\ncanister_id = \"aaaaa-aa\"\ndfx_bin = \"dfx\"\ntimeout_secs = 30\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.gateway.network, "local");
        assert_eq!(config.gateway.canister_id, "aaaaa-aa");
        assert_eq!(config.gateway.timeout_secs, 30);
    }
}

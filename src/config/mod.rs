mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

    load_from(&config_path).await
}

/// Reads a configuration file, choosing the format from its extension.
/// Files ending in `.yaml`/`.yml` are YAML, everything else is TOML.
pub async fn load_from(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config = parse(&config_str, config_path)?;
    config.validate()?;

    Ok(config)
}

fn parse(config_str: &str, config_path: &Path) -> Result<Config> {
    let is_yaml = matches!(
        config_path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );

    if is_yaml {
        Ok(serde_yaml::from_str(config_str)?)
    } else {
        Ok(toml::from_str(config_str)?)
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.mnemonic.expose().trim().is_empty() {
            return Err(Error::config("mnemonic must not be empty"));
        }
        if self.ledger.rpc_url.is_empty() {
            return Err(Error::config("ledger.rpc_url must not be empty"));
        }
        if self.ledger.request_timeout_secs == 0 {
            return Err(Error::config(
                "ledger.request_timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }
}

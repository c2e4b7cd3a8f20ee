mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;
    apply_env_overrides(&mut config, |key| env::var(key).ok());
    validate(&config)?;

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Deployment secrets and endpoints may come from the environment instead of
/// the YAML file.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(base_url) = lookup("AGENT_BASE_URL").filter(|v| !v.is_empty()) {
        config.agent.base_url = base_url;
    }
    if let Some(token) = lookup("BOT_AUTH_TOKEN").filter(|v| !v.is_empty()) {
        config.bot.auth_token = Some(token);
    }
}

pub fn validate(config: &Config) -> Result<()> {
    let base_url = config.agent.base_url.trim();
    if base_url.is_empty() {
        return Err(Error::config("agent.base_url must not be empty"));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(Error::config(format!(
            "agent.base_url must be an http(s) URL, got '{base_url}'"
        )));
    }
    if config.bot.typing_interval_ms == 0 {
        return Err(Error::config("bot.typing_interval_ms must be greater than 0"));
    }
    Ok(())
}

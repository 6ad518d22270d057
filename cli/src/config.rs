// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use moncal_core::{APP_NAME, Config};

const MONCAL_CONFIG_ENV: &str = "MONCAL_CONFIG";
const MONCAL_DEV_ENV: &str = "MONCAL_DEV";

const MONCAL_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const MONCAL_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration from `--config`, `$MONCAL_CONFIG`, or the default
/// location. A missing default file yields the default configuration.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(MONCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({MONCAL_DEV_ENV} is set): config must be explicitly specified via --config or {MONCAL_CONFIG_ENV} environment variable",
            ).into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(MONCAL_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if MONCAL_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if MONCAL_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            MONCAL_DEV_ENV,
            val,
            MONCAL_DEV_VALID_TRUE.join(", "),
            MONCAL_DEV_VALID_FALSE.join(", ")
        );
        None
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/smg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmgConfig {
    /// Total per-URL timeout for the HEAD probe, in seconds.
    pub head_timeout_secs: u64,
    /// TCP connect timeout for the HEAD probe, in seconds.
    pub connect_timeout_secs: u64,
    /// Maximum number of redirects followed per probe.
    pub max_redirections: u32,
}

impl Default for SmgConfig {
    fn default() -> Self {
        Self {
            head_timeout_secs: 10,
            connect_timeout_secs: 10,
            max_redirections: 10,
        }
    }
}

impl SmgConfig {
    pub fn head_timeout(&self) -> Duration {
        Duration::from_secs(self.head_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SmgConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SmgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SmgConfig = toml::from_str(&data)?;
    Ok(cfg)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

/// Default buildbot serving prebuilt cores and frontend assets.
pub const DEFAULT_BUILDBOT_URL: &str = "https://buildbot.libretro.com";

/// Default location of the frontend's own config file (expanded at use).
pub const DEFAULT_FRONTEND_CONFIG: &str = "~/.config/retroarch/retroarch.cfg";

/// Tool configuration loaded from `~/.config/retrosync/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Base URL of the build server.
    pub buildbot_url: String,
    /// Path to the frontend config file; overrides the built-in default,
    /// itself overridden by the `--config` flag.
    #[serde(default)]
    pub frontend_config: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            buildbot_url: DEFAULT_BUILDBOT_URL.to_string(),
            frontend_config: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("retrosync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ToolConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ToolConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ToolConfig = toml::from_str(&data)?;
    Url::parse(&cfg.buildbot_url)
        .with_context(|| format!("invalid buildbot_url in {}", path.display()))?;
    Ok(cfg)
}

/// The user's home directory, for `~` expansion in frontend paths.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
}

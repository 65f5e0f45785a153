//! Frontend configuration resolver.
//!
//! Reads retroarch.cfg, maps each recognized asset item to its configured
//! directory, and resolves the core install directory plus the list of
//! currently installed cores. Raw config values never reach the
//! filesystem directly: every value passes through [`resolve_value`]
//! exactly once (quote stripping, `~` expansion, portable `:` prefix).

mod parse;

use crate::error::SyncError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Asset categories published under `assets/frontend` on the buildbot.
///
/// Fixed table: `key()` is the remote archive name, `option_name()` the
/// frontend config option holding the destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetItem {
    Assets,
    Autoconfig,
    Cheats,
    DatabaseCursors,
    DatabaseRdb,
    Info,
    Overlays,
    ShadersCg,
    ShadersGlsl,
    ShadersSlang,
}

impl AssetItem {
    pub const ALL: [AssetItem; 10] = [
        AssetItem::Assets,
        AssetItem::Autoconfig,
        AssetItem::Cheats,
        AssetItem::DatabaseCursors,
        AssetItem::DatabaseRdb,
        AssetItem::Info,
        AssetItem::Overlays,
        AssetItem::ShadersCg,
        AssetItem::ShadersGlsl,
        AssetItem::ShadersSlang,
    ];

    /// Archive name on the buildbot (`{key}.zip`).
    pub fn key(self) -> &'static str {
        match self {
            AssetItem::Assets => "assets",
            AssetItem::Autoconfig => "autoconfig",
            AssetItem::Cheats => "cheats",
            AssetItem::DatabaseCursors => "database-cursors",
            AssetItem::DatabaseRdb => "database-rdb",
            AssetItem::Info => "info",
            AssetItem::Overlays => "overlays",
            AssetItem::ShadersCg => "shaders_cg",
            AssetItem::ShadersGlsl => "shaders_glsl",
            AssetItem::ShadersSlang => "shaders_slang",
        }
    }

    /// Frontend config option naming the destination directory.
    pub fn option_name(self) -> &'static str {
        match self {
            AssetItem::Assets => "assets_directory",
            AssetItem::Autoconfig => "joypad_autoconfig_dir",
            AssetItem::Cheats => "cheat_database_path",
            AssetItem::DatabaseCursors => "cursor_directory",
            AssetItem::DatabaseRdb => "content_database_path",
            AssetItem::Info => "libretro_info_path",
            AssetItem::Overlays => "overlay_directory",
            AssetItem::ShadersCg | AssetItem::ShadersGlsl | AssetItem::ShadersSlang => {
                "video_shader_dir"
            }
        }
    }

    /// Shader variants share one config option and land in per-variant
    /// subdirectories named after the item key.
    pub fn is_shader(self) -> bool {
        matches!(
            self,
            AssetItem::ShadersCg | AssetItem::ShadersGlsl | AssetItem::ShadersSlang
        )
    }
}

const CORE_DIR_OPTION: &str = "libretro_directory";

/// Everything a sync run needs from the frontend config.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Destination directory per asset item, in table order.
    pub item_paths: Vec<(AssetItem, PathBuf)>,
    /// Core install directory.
    pub core_dir: PathBuf,
    /// Installed core file names, sorted lexicographically.
    pub core_names: Vec<String>,
}

/// Resolve the frontend config at `config_path`, expanding `~` against
/// `home_dir`. Lists the core directory as a side effect.
pub fn resolve(config_path: &Path, home_dir: &Path) -> Result<ResolvedConfig, SyncError> {
    let text = fs::read_to_string(config_path)
        .map_err(|_| SyncError::ConfigNotFound(config_path.to_path_buf()))?;
    let options = parse::parse_flat(&text)?;
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new(""));

    let mut item_paths = Vec::with_capacity(AssetItem::ALL.len());
    for item in AssetItem::ALL {
        let raw = lookup(&options, item.option_name())?;
        let mut path = resolve_value(raw, config_dir, home_dir);
        if item.is_shader() {
            path.push(item.key());
        }
        item_paths.push((item, path));
    }

    let core_dir = resolve_value(lookup(&options, CORE_DIR_OPTION)?, config_dir, home_dir);
    let core_names = list_cores(&core_dir)?;

    Ok(ResolvedConfig {
        item_paths,
        core_dir,
        core_names,
    })
}

fn lookup<'a>(
    options: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, SyncError> {
    options
        .get(name)
        .map(String::as_str)
        .ok_or(SyncError::MissingKey(name))
}

/// Normalize one raw config value into a usable path.
///
/// Quotes are stripped first. A leading `:` marks a portable install: the
/// rest (minus leading separators) is joined onto the config file's own
/// directory. Otherwise a leading `~` expands to the home directory.
/// Plain relative values are left untouched, mirroring the frontend.
fn resolve_value(raw: &str, config_dir: &Path, home_dir: &Path) -> PathBuf {
    let value = raw.trim_matches('"');
    if let Some(rest) = value.strip_prefix(':') {
        let rest = rest.trim_start_matches(['\\', '/']);
        return config_dir.join(rest);
    }
    expand_home(value, home_dir)
}

/// Expand a leading `~` to `home_dir`; anything else is returned as-is.
pub fn expand_home(value: &str, home_dir: &Path) -> PathBuf {
    if value == "~" {
        home_dir.to_path_buf()
    } else if let Some(rest) = value.strip_prefix("~/") {
        home_dir.join(rest)
    } else {
        PathBuf::from(value)
    }
}

fn list_cores(core_dir: &Path) -> Result<Vec<String>, SyncError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(core_dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

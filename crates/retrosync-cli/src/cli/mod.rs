//! CLI for the retrosync updater.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use retrosync_core::sync::{RunSummary, SyncOptions};
use retrosync_core::timestamp::TzInfo;
use retrosync_core::{config, retroconf};
use std::path::PathBuf;

/// Sync RetroArch cores and assets from the libretro buildbot.
#[derive(Debug, Parser)]
#[command(name = "retrosync")]
#[command(about = "Sync RetroArch cores and assets from the libretro buildbot", long_about = None)]
pub struct Cli {
    /// Download and extract cores.
    #[arg(short, long)]
    pub cores: bool,

    /// Download and extract asset files.
    #[arg(short = 's', long)]
    pub assets: bool,

    /// Download and extract both.
    #[arg(short, long)]
    pub all: bool,

    /// Display target urls and directories.
    #[arg(short, long)]
    pub verbose: bool,

    /// Dry run; do not download anything.
    #[arg(short, long)]
    pub dry: bool,

    /// Path to the retroarch config file.
    #[arg(short = 'g', long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Cli {
    /// `--all` implies both modes.
    pub fn apply_all(&mut self) {
        if self.all {
            self.cores = true;
            self.assets = true;
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let mut cli = Cli::parse();
    cli.apply_all();

    if !cli.cores && !cli.assets {
        Cli::command().print_help()?;
        std::process::exit(2);
    }

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let home = config::home_dir();
    let frontend_cfg: PathBuf = cli
        .config
        .as_deref()
        .or(cfg.frontend_config.as_deref())
        .map(|p| retroconf::expand_home(p, &home))
        .unwrap_or_else(|| retroconf::expand_home(config::DEFAULT_FRONTEND_CONFIG, &home));

    // Fatal config errors abort here, before any network activity.
    let resolved = retroconf::resolve(&frontend_cfg, &home)?;

    let tz = TzInfo::capture();
    let opts = SyncOptions { dry_run: cli.dry };
    let mut summary = RunSummary::default();

    if cli.cores {
        commands::run_cores(&cfg, &resolved, opts, cli.verbose, &tz, &mut summary);
    }
    if cli.assets {
        commands::run_assets(&cfg, &resolved, opts, cli.verbose, &tz, &mut summary);
    }

    // Item failures are logged, never escalated to the exit code.
    if summary.failed.is_empty() {
        tracing::info!("run complete: {} item(s) updated", summary.succeeded.len());
    } else {
        tracing::warn!(
            "run complete: {} updated, {} failed",
            summary.succeeded.len(),
            summary.failed.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests;

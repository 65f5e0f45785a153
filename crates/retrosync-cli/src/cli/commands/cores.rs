//! Core updates: one nightly archive per installed core.

use retrosync_core::config::ToolConfig;
use retrosync_core::retroconf::ResolvedConfig;
use retrosync_core::sync::{RunSummary, SyncJob, SyncOptions};
use retrosync_core::timestamp::TzInfo;
use retrosync_core::{platform, urls};

pub fn run_cores(
    cfg: &ToolConfig,
    resolved: &ResolvedConfig,
    opts: SyncOptions,
    verbose: bool,
    tz: &TzInfo,
    summary: &mut RunSummary,
) {
    println!("updating cores...");

    let target = platform::target();
    let jobs: Vec<SyncJob> = resolved
        .core_names
        .iter()
        .map(|name| SyncJob {
            name: format!("{}.zip", name),
            url: urls::core_url(&cfg.buildbot_url, &target.os_family, &target.arch, name),
            dest: resolved.core_dir.clone(),
            create_dest: false,
        })
        .collect();

    super::run_and_print(&jobs, opts, verbose, tz, summary);
}

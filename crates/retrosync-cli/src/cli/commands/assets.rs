//! Asset updates: one frontend bundle per configured category.

use retrosync_core::config::ToolConfig;
use retrosync_core::retroconf::ResolvedConfig;
use retrosync_core::sync::{RunSummary, SyncJob, SyncOptions};
use retrosync_core::timestamp::TzInfo;
use retrosync_core::urls;

pub fn run_assets(
    cfg: &ToolConfig,
    resolved: &ResolvedConfig,
    opts: SyncOptions,
    verbose: bool,
    tz: &TzInfo,
    summary: &mut RunSummary,
) {
    println!("updating assets...");

    let jobs: Vec<SyncJob> = resolved
        .item_paths
        .iter()
        .map(|(item, dest)| SyncJob {
            name: format!("{}.zip", item.key()),
            url: urls::asset_url(&cfg.buildbot_url, item.key()),
            dest: dest.clone(),
            create_dest: true,
        })
        .collect();

    super::run_and_print(&jobs, opts, verbose, tz, summary);
}

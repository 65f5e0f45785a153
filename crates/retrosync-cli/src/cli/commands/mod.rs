//! Per-mode sync commands and shared progress printing.

mod assets;
mod cores;

pub use assets::run_assets;
pub use cores::run_cores;

use retrosync_core::sync::{self, JobEvent, RunSummary, SyncJob, SyncOptions};
use retrosync_core::timestamp::TzInfo;

/// Run the jobs with the numbered progress format and fold the results
/// into `summary`.
pub(crate) fn run_and_print(
    jobs: &[SyncJob],
    opts: SyncOptions,
    verbose: bool,
    tz: &TzInfo,
    summary: &mut RunSummary,
) {
    let result = sync::run_jobs(jobs, opts, tz, |event| match event {
        JobEvent::Started { index, total, job } => {
            println!("[{:2}/{:2}] fetching: {}", index, total, job.name);
            if verbose {
                println!("        from url: {}", job.url);
                println!("        into dir: {}", job.dest.display());
            }
        }
        JobEvent::Failed { job, error } => {
            println!("        could not fetch file: {}", job.name);
            println!("        {}", error);
        }
    });
    summary.merge(result);
}

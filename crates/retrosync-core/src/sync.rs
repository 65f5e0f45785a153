//! Sequential sync driver.
//!
//! Runs one download/extract cycle per job, in order. A failed job is
//! recorded and the run moves on; nothing here retries or aborts early.

use crate::error::SyncError;
use crate::extract;
use crate::fetch;
use crate::timestamp::TzInfo;
use std::fs;
use std::io::{Seek, SeekFrom};
use std::path::PathBuf;

/// One (remote archive, local destination) pairing.
#[derive(Debug, Clone)]
pub struct SyncJob {
    /// Display name, e.g. `overlays.zip`.
    pub name: String,
    pub url: String,
    pub dest: PathBuf,
    /// Asset destinations are created on demand; the core directory must
    /// already exist (it was listed to enumerate the jobs).
    pub create_dest: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Plan and report, but perform no network or filesystem work.
    pub dry_run: bool,
}

/// Per-run record of which items updated and which failed.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub succeeded: Vec<String>,
    /// (item name, error detail).
    pub failed: Vec<(String, String)>,
}

impl RunSummary {
    pub fn merge(&mut self, other: RunSummary) {
        self.succeeded.extend(other.succeeded);
        self.failed.extend(other.failed);
    }
}

/// Progress callbacks surfaced to the caller (the CLI prints these).
pub enum JobEvent<'a> {
    Started {
        index: usize,
        total: usize,
        job: &'a SyncJob,
    },
    Failed {
        job: &'a SyncJob,
        error: &'a SyncError,
    },
}

/// Run all jobs sequentially, isolating failures per job.
pub fn run_jobs(
    jobs: &[SyncJob],
    opts: SyncOptions,
    tz: &TzInfo,
    mut report: impl FnMut(JobEvent<'_>),
) -> RunSummary {
    let mut summary = RunSummary::default();
    let total = jobs.len();

    for (i, job) in jobs.iter().enumerate() {
        report(JobEvent::Started {
            index: i + 1,
            total,
            job,
        });
        if opts.dry_run {
            continue;
        }
        match run_one(job, tz) {
            Ok(()) => {
                tracing::info!(item = %job.name, dest = %job.dest.display(), "updated");
                summary.succeeded.push(job.name.clone());
            }
            Err(err) => {
                tracing::warn!(item = %job.name, error = %err, "item failed");
                report(JobEvent::Failed { job, error: &err });
                summary.failed.push((job.name.clone(), err.to_string()));
            }
        }
    }

    summary
}

fn run_one(job: &SyncJob, tz: &TzInfo) -> Result<(), SyncError> {
    if job.create_dest {
        fs::create_dir_all(&job.dest)?;
    }
    let mut tmp = fetch::download_to_temp(&job.url)?;
    tmp.as_file_mut().seek(SeekFrom::Start(0))?;
    extract::extract_archive(tmp.as_file_mut(), &job.dest, tz)
}

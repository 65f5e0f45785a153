//! Restores archive-embedded modification times.
//!
//! Buildbot zips carry DOS timestamps authored in UTC. The frontend and
//! later sync runs compare file ages across machines, so extraction keeps
//! the authored time instead of the download time: each entry's calendar
//! fields are interpreted as host local time (mktime semantics, DST
//! unknown), then shifted by the host's *standard* UTC offset.
//!
//! The offset is captured once per run. Entries whose DST epoch differs
//! from the current one come out an hour off; that quirk is kept on
//! purpose to match what the frontend has always seen on disk.

use chrono::{Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// Host timezone snapshot for one sync run.
#[derive(Debug, Clone, Copy)]
pub struct TzInfo {
    /// Standard (non-DST) offset in seconds east of UTC. Zero on Windows,
    /// where the buildbot timestamps are applied as-is.
    std_offset_east: i64,
}

impl TzInfo {
    /// Capture the host's standard UTC offset.
    pub fn capture() -> Self {
        if cfg!(windows) {
            return Self { std_offset_east: 0 };
        }
        // DST only ever adds to the eastward offset, so the standard offset
        // is the smaller of a midwinter and a midsummer sample. Sampling
        // both covers either hemisphere.
        let year = Local::now().year();
        let jan = offset_east_on(year, 1, 1);
        let jul = offset_east_on(year, 7, 1);
        Self {
            std_offset_east: jan.min(jul),
        }
    }

    /// Build a snapshot with a known offset (seconds east of UTC).
    pub fn with_offset(std_offset_east: i64) -> Self {
        Self { std_offset_east }
    }

    /// Unix mtime for an archive entry's embedded (year, month, day, hour,
    /// minute). Seconds are forced to zero; the fields are taken as local
    /// wall time and the standard offset is applied afterwards. Returns
    /// None for fields that do not form a valid date.
    pub fn archive_mtime(&self, year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Option<i64> {
        let naive = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))?
            .and_hms_opt(u32::from(hour), u32::from(minute), 0)?;
        Some(self.local_epoch(naive) + self.std_offset_east)
    }

    fn local_epoch(&self, naive: NaiveDateTime) -> i64 {
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt.timestamp(),
            // mktime with tm_isdst = -1 picks one of the two; take the earlier.
            LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
            // Spring-forward gap: treat the wall time as standard time.
            LocalResult::None => naive.and_utc().timestamp() - self.std_offset_east,
        }
    }
}

fn offset_east_on(year: i32, month: u32, day: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .and_then(|n| Local.from_local_datetime(&n).earliest())
        .map(|dt| i64::from(dt.offset().local_minus_utc()))
        .unwrap_or(0)
}

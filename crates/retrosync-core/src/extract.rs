//! Zip extraction with timestamp restoration.
//!
//! Entries are written in archive order. Any entry whose path would land
//! outside the destination (parent-dir traversal, absolute path) fails the
//! whole archive; extraction is all-or-first-error with no partial-success
//! reporting.

use crate::error::SyncError;
use crate::timestamp::TzInfo;
use filetime::FileTime;
use std::fs;
use std::io::{self, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Extract every entry of the archive in `reader` into `dest_dir`,
/// restoring each entry's embedded modification time via `tz`.
pub fn extract_archive<R: Read + Seek>(
    reader: R,
    dest_dir: &Path,
    tz: &TzInfo,
) -> Result<(), SyncError> {
    let mut archive = ZipArchive::new(reader)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| SyncError::PathTraversal(entry.name().to_string()))?;
        let out_path = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out_file = fs::File::create(&out_path)?;
            io::copy(&mut entry, &mut out_file)?;
        }

        if let Some(mtime) = entry.last_modified().and_then(|dt| {
            tz.archive_mtime(
                i32::from(dt.year()),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
            )
        }) {
            let ft = FileTime::from_unix_time(mtime, 0);
            filetime::set_file_times(&out_path, ft, ft)?;
        }
    }

    Ok(())
}

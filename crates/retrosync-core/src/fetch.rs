//! HTTP download into a scoped temp file.
//!
//! One plain GET per archive, streamed to disk through the write callback
//! so large bundles never sit in memory. The temp file is removed when the
//! returned handle drops, whether extraction succeeded or not.

use crate::error::SyncError;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Download `url` fully into a new temp file. The file cursor is left at
/// the end; callers rewind before reading.
pub fn download_to_temp(url: &str) -> Result<NamedTempFile, SyncError> {
    let mut tmp = NamedTempFile::new()?;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|e| SyncError::Network(e.to_string()))?;
    easy.follow_location(true)
        .map_err(|e| SyncError::Network(e.to_string()))?;
    easy.max_redirections(10)
        .map_err(|e| SyncError::Network(e.to_string()))?;
    easy.connect_timeout(Duration::from_secs(30))
        .map_err(|e| SyncError::Network(e.to_string()))?;

    {
        let file = tmp.as_file_mut();
        let mut transfer = easy.transfer();
        transfer
            .write_function(move |data| match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("temp file write failed: {}", e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(|e| SyncError::Network(e.to_string()))?;
        transfer
            .perform()
            .map_err(|e| SyncError::Network(format!("GET {}: {}", url, e)))?;
    }

    let code = easy
        .response_code()
        .map_err(|e| SyncError::Network(e.to_string()))?;
    if !(200..300).contains(&code) {
        return Err(SyncError::Network(format!(
            "GET {} returned HTTP {}",
            url, code
        )));
    }

    tmp.as_file_mut().flush()?;
    Ok(tmp)
}

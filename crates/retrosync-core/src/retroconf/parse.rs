//! Flat `key = value` parser for the frontend config format.
//!
//! retroarch.cfg has no section headers; every line is a bare assignment
//! with the value usually double-quoted. Comments (`#`) and blank lines
//! are skipped.

use crate::error::SyncError;
use std::collections::HashMap;

pub(crate) fn parse_flat(text: &str) -> Result<HashMap<String, String>, SyncError> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| SyncError::ConfigParse(line.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(SyncError::ConfigParse(line.to_string()));
        }
        map.insert(key.to_string(), value.trim().to_string());
    }
    Ok(map)
}

use crate::transport::error::DiscoveryError;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::fs;
use std::path::{Path, PathBuf};

static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)$").expect("trailing digits pattern compiles"));

/// A transport found during discovery, e.g. `/dev/ttyUSB2` with id `2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportEntry {
    pub device_id: u32,
    pub path: PathBuf,
}

/// Lists `dir` and keeps entries whose file name matches `pattern`.
///
/// The device id comes from the trailing digits of the name; matching names
/// without usable trailing digits are skipped. Results are sorted by device id.
///
/// # Errors
///
/// Returns `DiscoveryError::ReadDir` if the directory cannot be listed and
/// `DiscoveryError::Pattern` if `pattern` is not a valid regex.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<TransportEntry>, DiscoveryError> {
    let name_filter = Regex::new(pattern).map_err(|e| DiscoveryError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let entries = fs::read_dir(dir).map_err(|e| DiscoveryError::ReadDir {
        dir: dir.to_path_buf(),
        source: e,
    })?;

    let mut found: Vec<_> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if !name_filter.is_match(&name) {
                return None;
            }

            let Some(device_id) = device_id_from_name(&name) else {
                tracing::warn!(name = %name, "transport name has no numeric suffix, skipping");
                return None;
            };

            Some(TransportEntry {
                device_id,
                path: entry.path(),
            })
        })
        .collect();

    found.sort_by(|a, b| a.device_id.cmp(&b.device_id).then_with(|| a.path.cmp(&b.path)));
    Ok(found)
}

/// `ttyUSB12` → `12`.
pub fn device_id_from_name(name: &str) -> Option<u32> {
    TRAILING_DIGITS
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

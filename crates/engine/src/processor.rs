use crate::record::FileRecord;
use crate::version::{self, VERSION_SENTINEL};
use chrono::{DateTime, Local};
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// Fixed-width stand-in for the locale short date + short time of the
/// original tool.
pub const MTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Build the record for a single file.
///
/// Failures degrade the affected field (empty mtime, sentinel version,
/// absolute-path fallback) instead of aborting the scan.
pub fn process_file((path, meta): (PathBuf, Option<Metadata>), root: &Path) -> FileRecord {
    let relative_path = path
        .strip_prefix(root)
        .unwrap_or(&path)
        .display()
        .to_string();

    let last_modified = meta
        .as_ref()
        .and_then(|m| match m.modified() {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("mtime unreadable for {}: {e}", path.display());
                None
            }
        })
        .map(|t| DateTime::<Local>::from(t).format(MTIME_FORMAT).to_string())
        .unwrap_or_default();

    let version =
        version::file_version(&path).unwrap_or_else(|| VERSION_SENTINEL.to_string());

    FileRecord {
        relative_path,
        last_modified,
        version,
    }
}

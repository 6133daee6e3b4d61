use pelite::{FileMap, PeFile};
use std::path::Path;

/// Substituted when a file carries no readable version resource.
pub const VERSION_SENTINEL: &str = "0.0.0.0";

/// Fixed file version from a PE image's version resource.
///
/// Returns `None` for anything that is not a PE image with a
/// VS_FIXEDFILEINFO block. Parsing is byte-level, so it behaves the same
/// on every host OS.
pub fn file_version(path: &Path) -> Option<String> {
    let map = FileMap::open(path).ok()?;
    let file = PeFile::from_bytes(map.as_ref()).ok()?;
    let resources = file.resources().ok()?;
    let info = resources.version_info().ok()?;
    let fixed = info.fixed()?;
    let v = fixed.dwFileVersion;
    Some(format!("{}.{}.{}.{}", v.Major, v.Minor, v.Patch, v.Build))
}

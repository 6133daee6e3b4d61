/// One scanned file: root-relative path, formatted mtime, version string.
///
/// Records are built once during the scan and consumed once at render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub relative_path: String,
    pub last_modified: String,
    pub version: String,
}

impl FileRecord {
    /// The fixed-width record line, without the counter column.
    ///
    /// Layout: mtime left-justified to 20, version left-justified to 20,
    /// relative path, trailing space. Matches the historical output of the
    /// tool this replaces.
    #[must_use]
    pub fn format_line(&self) -> String {
        format!(
            "{:<20} {:<20} {} ",
            self.last_modified, self.version, self.relative_path
        )
    }
}

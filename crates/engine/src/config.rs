use derive_builder::Builder;
use std::path::PathBuf;

/// Scan configuration.
///
/// The root is resolved by the caller before the engine runs; no hidden
/// default-root lookup happens inside the scanning logic.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory to scan. A root that does not exist yields zero records.
    pub root: PathBuf,

    /// Worker threads for the parallel walk.
    #[builder(default = "1")]
    pub threads: usize,
}

use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod record;
pub mod version;

use crate::config::Config;
use crate::error::EngineError;
use crate::record::FileRecord;

/// Outcome of one scan: one record per regular file, plus walk-level
/// errors encountered along the way.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<FileRecord>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Run one scan over `config.root`.
///
/// A background thread drives the directory walk and feeds file entries
/// over a bounded channel; metadata extraction runs as a parallel map on
/// the receiving side. Every regular file produces exactly one record —
/// per-file metadata failures degrade that record's fields rather than
/// aborting the scan. Record order is unspecified; callers impose their
/// own order at render time.
#[must_use]
pub fn run(config: &Config) -> ScanOutcome {
    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = crossbeam_channel::unbounded();

    let walk_cfg = config.clone();
    std::thread::spawn(move || {
        filesystem::walk_parallel(&walk_cfg, &tx, &err_tx);
    });

    let root = config.root.clone();
    let records: Vec<FileRecord> = rx
        .into_iter()
        .par_bridge()
        .map(|item| processor::process_file(item, &root))
        .collect();

    // All senders are gone once the walk thread finishes, so this drains
    // without blocking indefinitely.
    let errors: Vec<(PathBuf, EngineError)> = err_rx.into_iter().collect();

    ScanOutcome { records, errors }
}

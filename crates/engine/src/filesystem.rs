use crate::config::Config;
use crate::error::EngineError;
use crossbeam_channel::Sender;
use ignore::{WalkBuilder, WalkState};
use std::fs::Metadata;
use std::path::PathBuf;

/// Parallel recursive walk emitting every regular file under the root.
///
/// Standard filters are disabled: hidden files are included and ignore
/// files carry no weight. A root that does not exist yields no entries.
/// A file whose metadata cannot be read is still emitted, with `None`
/// metadata, so the record degrades rather than disappears.
pub fn walk_parallel(
    config: &Config,
    tx: &Sender<(PathBuf, Option<Metadata>)>,
    err_tx: &Sender<(PathBuf, EngineError)>,
) {
    if !config.root.exists() {
        log::debug!("root {} does not exist, nothing to scan", config.root.display());
        return;
    }

    let mut builder = WalkBuilder::new(&config.root);
    builder
        .threads(config.threads.max(1))
        .standard_filters(false)
        .follow_links(false);

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        let err_tx = err_tx.clone();
        Box::new(move |entry| {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    let path = entry.path().to_owned();
                    match entry.metadata() {
                        Ok(meta) => {
                            let _ = tx.send((path, Some(meta)));
                        }
                        Err(e) => {
                            let source = e
                                .into_io_error()
                                .unwrap_or_else(|| std::io::Error::other("metadata unavailable"));
                            let _ = err_tx.send((
                                path.clone(),
                                EngineError::Metadata {
                                    path: path.clone(),
                                    source,
                                },
                            ));
                            let _ = tx.send((path, None));
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = err_tx.send((PathBuf::from("<walk>"), EngineError::Walk(e)));
                }
            }
            WalkState::Continue
        })
    });
}

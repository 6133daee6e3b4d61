use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to read metadata for '{path}': {source}")]
    Metadata {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

use std::path::PathBuf;

use thiserror::Error;

/// Failures while writing generator output to disk.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

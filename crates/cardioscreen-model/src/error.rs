use std::path::PathBuf;

use thiserror::Error;

/// Artifact problems found at startup. All of these are fatal: the
/// application must not serve requests with a partially loaded model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact schema mismatch: {0}")]
    Schema(String),
}

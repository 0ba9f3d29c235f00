use std::path::PathBuf;

use zl_core::GenError;

/// Everything that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{}: {source}", .path.display())]
    Table { path: PathBuf, source: GenError },

    #[error("generation failed: {0}")]
    Generate(#[from] GenError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the safe-write utility. Each one is reported to the caller
/// and turns into a non-zero exit.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("old_string not found in {}", path.display())]
    NotFound { path: PathBuf },

    #[error("required edit #{index} old_string not found in {}", path.display())]
    RequiredEditMissing { index: usize, path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid instruction file {}: {source}", path.display())]
    Instructions {
        path: PathBuf,
        source: serde_json::Error,
    },
}

use thiserror::Error;

use super::patch::PatchError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),
    #[error("command failed: {0}")]
    Command(String),
    #[error("ERROR: {0}")]
    Patch(#[from] PatchError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

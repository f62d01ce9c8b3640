#[allow(clippy::module_inception)]
pub mod error;
pub mod patch;

pub use error::CliError;
pub use patch::PatchError;

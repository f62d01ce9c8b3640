//! Literal find/replace writes that bypass the IDE's own edit channel.

mod edit;
mod instructions;
mod ops;

pub use edit::{apply_edits, replace_first, EditReport};
pub use instructions::{Edit, Instructions};
pub use ops::{append, batch, overwrite, replace};

mod kind;
mod model;

pub use kind::HookKind;
pub use model::{HookEvent, UNKNOWN};

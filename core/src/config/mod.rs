mod load;
mod types;

pub use load::{
    default_windsurf_home, get_observatory_home, load_builtin_defaults, load_default,
    load_from_file, load_with_override, Paths,
};
pub use types::*;

mod atomic;
mod ring;
mod text;

pub use atomic::{atomic_write, atomic_write_in_place};
pub use ring::truncate_front;
pub use text::{char_slice, file_name_of, short_timestamp, truncate_chars};

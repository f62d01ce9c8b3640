mod rotate;
mod writer;

pub use rotate::keep_last_lines;
pub use writer::EventStore;

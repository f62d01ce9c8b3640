pub mod cli;
pub mod dashboard;
pub mod hook;
pub mod patch;

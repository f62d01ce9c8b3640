pub mod api;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod hooks;
pub mod patch;
pub mod policy;
pub mod stats;
pub mod store;
pub mod util;

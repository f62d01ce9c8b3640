pub mod blocked_paths;

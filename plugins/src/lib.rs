pub mod factory;
pub mod policy;
pub mod rules;
pub mod services;

//! ServicesFactory implementation: builds the rule extractor and path policy from config.
use observatory_core::api::{AppConfig, Services, ServicesFactory};

use crate::factory;

#[derive(Default)]
pub struct PluginServicesFactory;

impl ServicesFactory for PluginServicesFactory {
    fn build_services(&self, cfg: &AppConfig) -> anyhow::Result<Services> {
        Ok(Services {
            rules: factory::build_rule_extractor(cfg)?,
            policy: factory::build_policy(cfg),
        })
    }
}

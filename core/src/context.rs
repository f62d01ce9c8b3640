use std::sync::Arc;

use crate::config::{AppConfig, Paths};
use crate::policy::{AllowAll, PathPolicy};
use crate::stats::{NoRules, RuleExtractor, StatsFile};
use crate::store::EventStore;

/// Pluggable capabilities the hooks delegate to.
#[derive(Clone)]
pub struct Services {
    pub rules: Arc<dyn RuleExtractor>,
    pub policy: Arc<dyn PathPolicy>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            rules: Arc::new(NoRules),
            policy: Arc::new(AllowAll),
        }
    }
}

pub trait ServicesFactory: Send + Sync {
    fn build_services(&self, cfg: &AppConfig) -> anyhow::Result<Services>;
}

/// Everything one hook invocation needs: resolved config, file layout and
/// the plugin services.
#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    paths: Paths,
    services: Services,
}

impl AppContext {
    pub fn new(cfg: AppConfig, services: Services) -> Self {
        let paths = cfg.paths();
        Self {
            cfg,
            paths,
            services,
        }
    }

    pub fn from_factory(cfg: AppConfig, factory: &dyn ServicesFactory) -> anyhow::Result<Self> {
        let services = factory.build_services(&cfg)?;
        Ok(Self::new(cfg, services))
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn store(&self) -> EventStore {
        EventStore::from_config(&self.cfg)
    }

    pub fn stats_file(&self) -> StatsFile {
        StatsFile::from_config(&self.cfg)
    }
}

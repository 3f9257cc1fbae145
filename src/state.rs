use std::sync::{Arc, RwLock};

use super::{config::Config, registry::Registry};

pub struct AppState {
    pub config: Config,
    pub registry: RwLock<Registry>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        Arc::new(Self {
            config,
            registry: RwLock::new(Registry::seed()),
        })
    }
}

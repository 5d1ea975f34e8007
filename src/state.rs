use std::sync::Arc;

use crate::{config::AppConfig, store::ClinicStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClinicStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: impl ClinicStore + 'static, config: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

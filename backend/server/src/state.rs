use std::sync::Arc;

use tracing::warn;

use super::{
    config::Config,
    database::{MemorySettingsStore, RedisSettingsStore, SettingsStore},
    error::AppError,
};

pub struct AppState {
    pub config: Config,
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    pub async fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load()?;

        let settings: Arc<dyn SettingsStore> = match &config.redis_url {
            Some(redis_url) => Arc::new(RedisSettingsStore::connect(redis_url).await?),
            None => {
                warn!("REDIS_URL not set, settings are kept in memory and lost on restart");
                Arc::new(MemorySettingsStore::new())
            }
        };

        Ok(Self::with_store(config, settings))
    }

    pub fn with_store(config: Config, settings: Arc<dyn SettingsStore>) -> Arc<Self> {
        Arc::new(Self { config, settings })
    }
}

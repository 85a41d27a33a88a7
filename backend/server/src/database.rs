//! # Settings Storage
//!
//! Single source of truth for the maintenance flag and the contact metadata.
//!
//! ## Redis
//!
//! - One hash at key `settings`, one field per attribute
//! - `maintenance_mode` holds `"true"` or `"false"`
//! - `contact_email`/`contact_phone` are deleted rather than stored empty
//! - An empty hash means the record was never written, which reads as open
//!
//! Writes go through one `MULTI`/`EXEC` pipeline so a reader never sees a flag from one
//! write and contact details from another.
//!
//! ## Memory
//!
//! Used when no `REDIS_URL` is configured and in tests. Nothing survives a restart.
use std::collections::HashMap;

use async_trait::async_trait;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use shared::Settings;
use tokio::sync::RwLock;

use crate::error::StorageError;

pub const SETTINGS_KEY: &str = "settings";
pub const MAINTENANCE_FIELD: &str = "maintenance_mode";
pub const EMAIL_FIELD: &str = "contact_email";
pub const PHONE_FIELD: &str = "contact_phone";

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when no record has been written yet.
    async fn read(&self) -> Result<Option<Settings>, StorageError>;

    async fn write(&self, settings: &Settings) -> Result<(), StorageError>;
}

pub struct RedisSettingsStore {
    connection: ConnectionManager,
}

impl RedisSettingsStore {
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        let config = ConnectionManagerConfig::new().set_number_of_retries(1);

        let client = Client::open(redis_url)?;
        let connection = client.get_connection_manager_with_config(config).await?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl SettingsStore for RedisSettingsStore {
    async fn read(&self) -> Result<Option<Settings>, StorageError> {
        let mut connection = self.connection.clone();
        let fields: HashMap<String, String> = connection.hgetall(SETTINGS_KEY).await?;

        settings_from_fields(&fields)
    }

    async fn write(&self, settings: &Settings) -> Result<(), StorageError> {
        let mut connection = self.connection.clone();
        let mut pipe = redis::pipe();
        pipe.atomic().hset(
            SETTINGS_KEY,
            MAINTENANCE_FIELD,
            settings.maintenance_mode.to_string(),
        );

        for (field, value) in [
            (EMAIL_FIELD, &settings.contact_email),
            (PHONE_FIELD, &settings.contact_phone),
        ] {
            match value {
                Some(value) => pipe.hset(SETTINGS_KEY, field, value),
                None => pipe.hdel(SETTINGS_KEY, field),
            };
        }

        let () = pipe.query_async(&mut connection).await?;

        Ok(())
    }
}

pub fn settings_from_fields(
    fields: &HashMap<String, String>,
) -> Result<Option<Settings>, StorageError> {
    if fields.is_empty() {
        return Ok(None);
    }

    let maintenance_mode = match fields.get(MAINTENANCE_FIELD) {
        Some(raw) => raw
            .trim()
            .parse::<bool>()
            .map_err(|_| StorageError::Corrupt(format!("{MAINTENANCE_FIELD} = {raw:?}")))?,
        None => false,
    };

    Ok(Some(Settings {
        maintenance_mode,
        contact_email: fields.get(EMAIL_FIELD).cloned(),
        contact_phone: fields.get(PHONE_FIELD).cloned(),
    }))
}

#[derive(Default)]
pub struct MemorySettingsStore {
    settings: RwLock<Option<Settings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
        }
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn read(&self) -> Result<Option<Settings>, StorageError> {
        Ok(self.settings.read().await.clone())
    }

    async fn write(&self, settings: &Settings) -> Result<(), StorageError> {
        *self.settings.write().await = Some(settings.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_hash_is_no_record() {
        assert_eq!(settings_from_fields(&HashMap::new()).unwrap(), None);
    }

    #[test]
    fn test_fields_parse() {
        let settings = settings_from_fields(&fields(&[
            (MAINTENANCE_FIELD, "true"),
            (EMAIL_FIELD, "help@shop.test"),
        ]))
        .unwrap()
        .unwrap();

        assert!(settings.maintenance_mode);
        assert_eq!(settings.contact_email.as_deref(), Some("help@shop.test"));
        assert_eq!(settings.contact_phone, None);
    }

    #[test]
    fn test_missing_flag_defaults_open() {
        let settings = settings_from_fields(&fields(&[(PHONE_FIELD, "555-0100")]))
            .unwrap()
            .unwrap();

        assert!(!settings.maintenance_mode);
    }

    #[test]
    fn test_garbage_flag_is_corrupt() {
        let result = settings_from_fields(&fields(&[(MAINTENANCE_FIELD, "yes")]));

        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.read().await.unwrap(), None);

        let settings = Settings {
            maintenance_mode: true,
            ..Settings::default()
        };
        store.write(&settings).await.unwrap();

        assert_eq!(store.read().await.unwrap(), Some(settings));
    }
}

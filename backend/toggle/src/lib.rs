//! # Settings Toggle
//!
//! Admin-side writer for the settings record. Seeds it on a fresh deployment and flips the
//! maintenance flag afterwards.
//!
//! - Reads the current record, defaults if none was written yet
//! - Applies only what was asked for, everything else is kept
//! - Writes the whole record back in one go
use server::{database::SettingsStore, error::StorageError};
use shared::Settings;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub maintenance_mode: bool,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub clear_contact: bool,
}

pub fn apply(mut settings: Settings, update: SettingsUpdate) -> Settings {
    settings.maintenance_mode = update.maintenance_mode;

    if update.clear_contact {
        settings.contact_email = None;
        settings.contact_phone = None;
    }
    if let Some(email) = update.contact_email {
        settings.contact_email = Some(email);
    }
    if let Some(phone) = update.contact_phone {
        settings.contact_phone = Some(phone);
    }

    settings
}

pub async fn update_settings(
    store: &dyn SettingsStore,
    update: SettingsUpdate,
) -> Result<Settings, StorageError> {
    let current = store.read().await?.unwrap_or_default();
    let updated = apply(current, update);

    store.write(&updated).await?;

    Ok(updated)
}

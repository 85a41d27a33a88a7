use async_trait::async_trait;
use reqwest::Client;
use shared::{MaintenanceStatus, STATUS_ROUTE};

use crate::error::FetchError;

/// Where the cache gets the flag from.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<bool, FetchError>;
}

pub struct HttpStatusSource {
    client: Client,
    url: String,
}

impl HttpStatusSource {
    /// `base_url` is the storefront origin, e.g. `http://localhost:1111`.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{STATUS_ROUTE}", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self) -> Result<bool, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        // a 500 still carries `maintenanceMode: false`, it counts as a failed check
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let status: MaintenanceStatus = response.json().await?;

        Ok(status.maintenance_mode)
    }
}

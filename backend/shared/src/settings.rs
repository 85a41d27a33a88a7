use serde::{Deserialize, Serialize};

/// The singleton settings record.
///
/// A missing record reads as [`Settings::default`], which keeps the storefront open.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub maintenance_mode: bool,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Body of a successful status read.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatus {
    pub maintenance_mode: bool,
}

/// Body of a failed status read. `maintenance_mode` is always `false`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusFailure {
    pub error: String,
    pub maintenance_mode: bool,
}

impl StatusFailure {
    pub fn fail_open(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            maintenance_mode: false,
        }
    }
}

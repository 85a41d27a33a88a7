//! # Shared
//!
//! Types and constants both sides of maintenance gating agree on.
//!
//! ## Contract
//!
//! - Status read: `GET /api/maintenance` returning `{ "maintenanceMode": bool }`
//! - Cookie: `maintenance_mode=true|false`, path `/`, http-only, lax, 30 days
//! - Fallback route: `/maintenance`, where redirecting gates send visitors
//!
//! The cookie only feeds the edge layer. It is a cache of the settings flag and never
//! the source of truth for a bypass decision.
pub mod session;
pub mod settings;
pub mod view;

pub const STATUS_ROUTE: &str = "/api/maintenance";
pub const SETTINGS_ROUTE: &str = "/api/settings";
pub const FALLBACK_ROUTE: &str = "/maintenance";

pub const COOKIE_NAME: &str = "maintenance_mode";
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 30;

pub use session::{Role, Session, SessionStatus};
pub use settings::{MaintenanceStatus, Settings, StatusFailure};
pub use view::MaintenanceFallbackView;

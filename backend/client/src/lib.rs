//! # Client Gating
//!
//! Client logic for maintenance mode.
//!
//! ## Flow
//!
//! - Application startup builds one [`MaintenanceCache`] around a [`StatusSource`]
//! - Every page boundary mounts a [`MaintenanceGate`] sharing that cache
//! - Mounting checks the flag; gates mounting together share one request
//! - Until the check resolves the gate is pending and renders nothing
//! - Flag off: render children
//! - Flag on: administrators render children, everyone else gets the fallback
//! - The fallback is swapped in place or reached by redirect, depending on the gate variant
//!
//! ## Failures
//!
//! A failed check keeps the last known flag and records the error. Before any check has
//! succeeded the flag reads `false`, so the store stays open.
pub mod cache;
pub mod error;
pub mod gate;
pub mod source;

pub use cache::{CacheEntry, MaintenanceCache};
pub use error::FetchError;
pub use gate::{Enforcement, GateConfig, GateDecision, GatePhase, MaintenanceGate, Rendered, decide};
pub use source::{HttpStatusSource, StatusSource};

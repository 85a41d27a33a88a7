//! # Maintenance Gate
//!
//! Decision point every page boundary goes through.
//!
//! ## States
//!
//! - `Uninitialized`: constructed, not mounted
//! - `Loading`: mounted, check in flight
//! - `Ready`: check resolved, success or failure
//!
//! Only `Ready` produces a render decision, and only with a resolved session. A session
//! still loading keeps the gate pending so an administrator never sees the fallback flash.
use std::sync::Arc;

use shared::{FALLBACK_ROUTE, Session};

use crate::cache::{CacheEntry, MaintenanceCache};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Uninitialized,
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Pending,
    RenderChildren,
    RenderFallback,
    RedirectToFallback,
}

/// How a closed storefront is enforced by this gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Enforcement {
    /// Swap the fallback in place, for server-rendered shells.
    #[default]
    InPlace,
    /// Navigate to the fallback route, for client-side route guards.
    Redirect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub admin_bypass: bool,
    pub enforcement: Enforcement,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            admin_bypass: true,
            enforcement: Enforcement::InPlace,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered<T> {
    Pending,
    Children(T),
    Fallback(T),
    Redirect(&'static str),
}

pub fn decide(
    entry: &CacheEntry,
    session: &Session,
    initialized: bool,
    config: &GateConfig,
) -> GateDecision {
    if !initialized || session.is_loading() {
        return GateDecision::Pending;
    }

    if !entry.is_maintenance_mode {
        return GateDecision::RenderChildren;
    }

    if config.admin_bypass && session.is_admin() {
        return GateDecision::RenderChildren;
    }

    match config.enforcement {
        Enforcement::InPlace => GateDecision::RenderFallback,
        Enforcement::Redirect => GateDecision::RedirectToFallback,
    }
}

pub struct MaintenanceGate {
    cache: Arc<MaintenanceCache>,
    config: GateConfig,
    phase: GatePhase,
}

impl MaintenanceGate {
    pub fn new(cache: Arc<MaintenanceCache>, config: GateConfig) -> Self {
        Self {
            cache,
            config,
            phase: GatePhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Checks the flag through the shared cache. Also used to re-check on navigation.
    pub async fn mount(&mut self) {
        self.phase = GatePhase::Loading;
        self.cache.check_maintenance_mode().await;
        self.phase = GatePhase::Ready;
    }

    pub fn decision(&self, session: &Session) -> GateDecision {
        decide(
            &self.cache.snapshot(),
            session,
            self.phase == GatePhase::Ready,
            &self.config,
        )
    }

    pub fn render<T>(
        &self,
        session: &Session,
        children: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> Rendered<T> {
        match self.decision(session) {
            GateDecision::Pending => Rendered::Pending,
            GateDecision::RenderChildren => Rendered::Children(children()),
            GateDecision::RenderFallback => Rendered::Fallback(fallback()),
            GateDecision::RedirectToFallback => Rendered::Redirect(FALLBACK_ROUTE),
        }
    }
}

//! # Maintenance Cache
//!
//! One copy of the flag per client session, constructed at startup and handed to every gate.
//!
//! ## Single Flight
//!
//! `check_maintenance_mode` holds `fetch_lock` across the request. A caller records the
//! completed-fetch counter before queueing on the lock; if the counter moved while it
//! waited, a fetch resolved on its behalf and it returns that outcome instead of issuing
//! its own request.
//!
//! ## Snapshots
//!
//! Published through a `watch` channel:
//! - start of a fetch: `loading = true`, flag and error untouched
//! - success: `{ server value, loading: false, error: None }`
//! - failure: `{ previous value, loading: false, error: Some(message) }`
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

use crate::source::StatusSource;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheEntry {
    pub is_maintenance_mode: bool,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct MaintenanceCache {
    source: Arc<dyn StatusSource>,
    snapshot: watch::Sender<CacheEntry>,
    fetch_lock: Mutex<()>,
    completed: AtomicU64,
}

impl MaintenanceCache {
    pub fn new(source: Arc<dyn StatusSource>) -> Arc<Self> {
        let (snapshot, _) = watch::channel(CacheEntry::default());

        Arc::new(Self {
            source,
            snapshot,
            fetch_lock: Mutex::new(()),
            completed: AtomicU64::new(0),
        })
    }

    pub fn snapshot(&self) -> CacheEntry {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CacheEntry> {
        self.snapshot.subscribe()
    }

    /// True once any check has resolved, successfully or not.
    pub fn has_resolved(&self) -> bool {
        self.completed.load(Ordering::Acquire) > 0
    }

    pub async fn check_maintenance_mode(&self) -> bool {
        let seen = self.completed.load(Ordering::Acquire);
        let _guard = self.fetch_lock.lock().await;

        if self.completed.load(Ordering::Acquire) != seen {
            debug!("Joined an in-flight maintenance check");
            return self.snapshot.borrow().is_maintenance_mode;
        }

        let mut loading = LoadingGuard::start(&self.snapshot);
        let outcome = self.source.fetch_status().await;
        loading.disarm();

        self.snapshot.send_modify(|entry| {
            entry.loading = false;

            match outcome {
                Ok(maintenance_mode) => {
                    debug!("Maintenance check resolved: {maintenance_mode}");
                    entry.is_maintenance_mode = maintenance_mode;
                    entry.error = None;
                }
                Err(e) => {
                    warn!(
                        "Maintenance check failed, keeping {}: {e}",
                        entry.is_maintenance_mode
                    );
                    entry.error = Some(e.to_string());
                }
            }
        });

        self.completed.fetch_add(1, Ordering::Release);

        self.snapshot.borrow().is_maintenance_mode
    }
}

/// Clears `loading` if the check is dropped before its fetch resolves.
struct LoadingGuard<'a> {
    snapshot: &'a watch::Sender<CacheEntry>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn start(snapshot: &'a watch::Sender<CacheEntry>) -> Self {
        snapshot.send_modify(|entry| entry.loading = true);

        Self {
            snapshot,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("Maintenance check abandoned mid-fetch");
            self.snapshot.send_modify(|entry| entry.loading = false);
        }
    }
}

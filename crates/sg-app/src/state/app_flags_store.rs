//! App flags store
//!
//! Holds the transient UI flags and the persisted onboarding flag. Only the
//! [`PersistedFlags`] subset ever reaches the key/value store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use sg_core::flags::{PersistedFlags, PERSISTED_FLAGS_KEY};
use sg_core::ports::PersistentStorePort;
use sg_core::{AppFlags, ErrorReport};
use tokio::sync::watch;
use tracing::{debug, warn};

use super::errors::PersistError;
use super::listeners::{ChangeListeners, StateChangeListener};

pub struct AppFlagsStore {
    store: Arc<dyn PersistentStorePort>,
    state: watch::Sender<AppFlags>,
    in_flight: AtomicUsize,
    listeners: ChangeListeners,
}

impl AppFlagsStore {
    /// Store with neutral flags and nothing read from storage.
    pub fn new(store: Arc<dyn PersistentStorePort>) -> Self {
        Self::with_flags(store, AppFlags::default())
    }

    fn with_flags(store: Arc<dyn PersistentStorePort>, flags: AppFlags) -> Self {
        let (state, _) = watch::channel(flags);
        Self {
            store,
            state,
            in_flight: AtomicUsize::new(0),
            listeners: ChangeListeners::default(),
        }
    }

    /// Cold start: read the persisted subset, transient flags start neutral.
    ///
    /// An unreadable or corrupt payload is logged and treated as never
    /// persisted.
    pub async fn restore(store: Arc<dyn PersistentStorePort>) -> Self {
        let persisted = match store.get(PERSISTED_FLAGS_KEY).await {
            Ok(Some(raw)) => PersistedFlags::from_json(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "Ignoring unreadable persisted flags");
                PersistedFlags::default()
            }),
            Ok(None) => PersistedFlags::default(),
            Err(err) => {
                warn!(error = %err, "Failed to read persisted flags");
                PersistedFlags::default()
            }
        };

        debug!(is_onboarded = persisted.is_onboarded, "Restored app flags");
        Self::with_flags(store, AppFlags::from_persisted(&persisted))
    }

    pub fn snapshot(&self) -> AppFlags {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppFlags> {
        self.state.subscribe()
    }

    pub fn register_listener(&self, listener: Weak<dyn StateChangeListener>) {
        self.listeners.register(listener);
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.modify(|flags| {
            let changed = flags.is_loading != is_loading;
            flags.is_loading = is_loading;
            changed
        });
    }

    /// Mark an operation in flight until the returned guard drops.
    ///
    /// Overlapping operations keep `is_loading` set until the last one ends.
    pub fn begin_loading(self: &Arc<Self>) -> LoadingGuard {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
            self.set_loading(true);
        }
        LoadingGuard {
            store: Arc::clone(self),
        }
    }

    pub fn set_error(&self, report: ErrorReport) {
        self.modify(|flags| {
            flags.last_error = Some(report);
            true
        });
    }

    pub fn clear_error(&self) {
        self.modify(|flags| flags.last_error.take().is_some());
    }

    /// Update the onboarding flag and persist it.
    ///
    /// The in-memory value changes first, so navigation follows
    /// immediately. When the write fails the stored payload keeps its
    /// previous value and the error is returned.
    pub async fn set_is_onboarded(&self, is_onboarded: bool) -> Result<(), PersistError> {
        self.modify(|flags| {
            let changed = flags.is_onboarded != is_onboarded;
            flags.is_onboarded = is_onboarded;
            changed
        });

        let payload = self.snapshot().to_persisted().to_json()?;
        if let Err(err) = self.store.set(PERSISTED_FLAGS_KEY, &payload).await {
            warn!(error = %err, is_onboarded, "Failed to persist onboarding flag");
            return Err(PersistError::Write(err));
        }

        debug!(is_onboarded, "Persisted onboarding flag");
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut AppFlags) -> bool) {
        if self.state.send_if_modified(f) {
            self.listeners.notify();
        }
    }
}

/// Clears the loading flag when the last in-flight operation ends.
#[must_use = "loading is cleared as soon as the guard is dropped"]
pub struct LoadingGuard {
    store: Arc<AppFlagsStore>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.store.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.store.set_loading(false);
        }
    }
}

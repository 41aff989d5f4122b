use std::sync::{Mutex, PoisonError, Weak};

/// Receives a synchronous callback after a store mutation.
///
/// Called on the mutating task, after the new value is visible to readers.
pub trait StateChangeListener: Send + Sync {
    fn on_state_changed(&self);
}

/// Weakly held listener registry shared by the stores.
#[derive(Default)]
pub struct ChangeListeners {
    inner: Mutex<Vec<Weak<dyn StateChangeListener>>>,
}

impl ChangeListeners {
    pub fn register(&self, listener: Weak<dyn StateChangeListener>) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Invoke every live listener, pruning dropped ones.
    ///
    /// The registry lock is released before any callback runs, so a listener
    /// may itself mutate a store.
    pub fn notify(&self) {
        let live: Vec<_> = {
            let mut listeners = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            listeners.retain(|l| l.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };

        for listener in live {
            listener.on_state_changed();
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

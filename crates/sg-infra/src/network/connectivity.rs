//! Connectivity flag
//!
//! The platform reachability callback flips the flag; the classifier reads
//! it synchronously.

use std::sync::atomic::{AtomicBool, Ordering};

use sg_core::ports::ConnectivityProbePort;
use tracing::info;

pub struct AtomicConnectivity {
    online: AtomicBool,
}

impl AtomicConnectivity {
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    /// Record a reachability change reported by the platform.
    pub fn set_online(&self, online: bool) {
        let previous = self.online.swap(online, Ordering::SeqCst);
        if previous != online {
            info!(online, "Connectivity changed");
        }
    }
}

impl Default for AtomicConnectivity {
    /// Assume online until told otherwise.
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConnectivityProbePort for AtomicConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_online() {
        assert!(AtomicConnectivity::default().is_online());
    }

    #[test]
    fn test_set_online_is_visible_to_probe() {
        let probe = AtomicConnectivity::default();
        probe.set_online(false);
        assert!(!probe.is_online());
        probe.set_online(true);
        assert!(probe.is_online());
    }
}

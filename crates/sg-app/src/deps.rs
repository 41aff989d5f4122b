//! # Application Dependencies
//!
//! Dependency grouping for [`crate::App`] construction. Not a builder: no
//! build steps, no defaults, no hidden logic. Every port is required.

use std::sync::Arc;

use sg_core::ports::{
    AuthBackendPort, ConnectivityProbePort, NavigationHostPort, PersistentStorePort,
};

/// Application dependency grouping (just parameter grouping)
pub struct AppDeps {
    pub auth_backend: Arc<dyn AuthBackendPort>,
    pub connectivity: Arc<dyn ConnectivityProbePort>,
    pub persistent_store: Arc<dyn PersistentStorePort>,
    pub navigation_host: Arc<dyn NavigationHostPort>,
}

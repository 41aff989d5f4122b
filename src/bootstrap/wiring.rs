//! # Dependency wiring
//!
//! Builds the concrete adapters from [`ClientConfig`] and groups them into
//! [`AppDeps`]. This is the only place that depends on `sg-infra` and
//! `sg-app` together. Assembly only: no session or flag decisions here.

use std::sync::Arc;
use std::time::Duration;

use sg_app::AppDeps;
use sg_core::app_dirs::AppDirs;
use sg_core::ports::NavigationHostPort;
use sg_core::ClientConfig;
use sg_infra::{AtomicConnectivity, FileKeyValueStore, GraphqlAuthBackend, SystemClock};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors while building infrastructure adapters
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("GraphQL endpoint is not configured")]
    MissingEndpoint,

    #[error("Data directory is not configured")]
    MissingDataDir,

    #[error("Auth backend initialization failed: {0}")]
    AuthBackendInit(#[from] sg_infra::GraphqlBackendError),
}

/// Adapters the host keeps a handle on after wiring.
pub struct WiredDependencies {
    pub deps: AppDeps,
    /// Flipped by the platform reachability callback.
    pub connectivity: Arc<AtomicConnectivity>,
}

pub fn wire_dependencies(
    config: &ClientConfig,
    navigation_host: Arc<dyn NavigationHostPort>,
) -> WiringResult<WiredDependencies> {
    if config.graphql_endpoint.trim().is_empty() {
        return Err(WiringError::MissingEndpoint);
    }
    if config.data_dir.as_os_str().is_empty() {
        return Err(WiringError::MissingDataDir);
    }

    let timeout_secs = match config.request_timeout_secs {
        0 => DEFAULT_REQUEST_TIMEOUT_SECS,
        secs => secs,
    };

    let auth_backend = GraphqlAuthBackend::new(
        config.graphql_endpoint.clone(),
        Duration::from_secs(timeout_secs),
        Arc::new(SystemClock),
    )?;

    let store_path = AppDirs {
        app_data_root: config.data_dir.clone(),
    }
    .store_path();
    let persistent_store = FileKeyValueStore::new(store_path);

    let connectivity = Arc::new(AtomicConnectivity::default());

    tracing::debug!(
        endpoint = %config.graphql_endpoint,
        timeout_secs,
        store = %persistent_store.path().display(),
        "Dependencies wired"
    );

    Ok(WiredDependencies {
        deps: AppDeps {
            auth_backend: Arc::new(auth_backend),
            connectivity: connectivity.clone(),
            persistent_store: Arc::new(persistent_store),
            navigation_host,
        },
        connectivity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::NavigationTarget;

    struct NoopHost;

    impl NavigationHostPort for NoopHost {
        fn replace_stack(&self, _target: NavigationTarget) {}
    }

    fn config(endpoint: &str, data_dir: &str) -> ClientConfig {
        ClientConfig {
            graphql_endpoint: endpoint.to_string(),
            request_timeout_secs: 0,
            data_dir: data_dir.into(),
            file_logging: false,
        }
    }

    #[test]
    fn test_missing_endpoint_is_rejected() {
        let result = wire_dependencies(&config("  ", "/tmp/sg"), Arc::new(NoopHost));
        assert!(matches!(result, Err(WiringError::MissingEndpoint)));
    }

    #[test]
    fn test_missing_data_dir_is_rejected() {
        let result = wire_dependencies(
            &config("http://localhost/graphql", ""),
            Arc::new(NoopHost),
        );
        assert!(matches!(result, Err(WiringError::MissingDataDir)));
    }

    #[test]
    fn test_connectivity_handle_is_shared_with_deps() {
        let wired = wire_dependencies(
            &config("http://localhost/graphql", "/tmp/sg"),
            Arc::new(NoopHost),
        )
        .unwrap();

        wired.connectivity.set_online(false);
        assert!(!wired.deps.connectivity.is_online());
    }
}

use std::sync::Arc;

use sg_app::App;
use sg_core::ports::NavigationHostPort;
use sg_core::ClientConfig;
use sg_infra::AtomicConnectivity;
use tracing::{info, info_span, Instrument};

use super::wiring::wire_dependencies;

/// A started session-gating layer and the handles a host needs.
pub struct SessionGate {
    pub app: App,
    pub connectivity: Arc<AtomicConnectivity>,
}

/// Wire adapters from `config`, restore persisted flags and mount the
/// first stack on `navigation_host`.
pub async fn start(
    config: &ClientConfig,
    navigation_host: Arc<dyn NavigationHostPort>,
) -> anyhow::Result<SessionGate> {
    let span = info_span!("bootstrap.start", data_dir = %config.data_dir.display());

    async {
        let wired = wire_dependencies(config, navigation_host)?;
        let app = App::start(wired.deps).await;

        info!("Session gate started");
        Ok(SessionGate {
            app,
            connectivity: wired.connectivity,
        })
    }
    .instrument(span)
    .await
}

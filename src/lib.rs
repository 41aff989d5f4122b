//! SessionGate
//!
//! Host-facing entry point: configuration loading, tracing setup and the
//! wiring of `sg-infra` adapters into the `sg-app` runtime.

pub mod bootstrap;

pub use bootstrap::tracing::init_tracing_subscriber;
pub use bootstrap::{load_config, resolve_config, start, SessionGate};
pub use sg_app::{App, AppFlagsBinding, SessionBinding, UiBindings};
pub use sg_core::{ClientConfig, Credentials, ErrorKind, ErrorReport, Failure, NavigationTarget};
pub use tokio_util::sync::CancellationToken;

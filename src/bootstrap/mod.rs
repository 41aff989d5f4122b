pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::{start, SessionGate};
pub use wiring::{wire_dependencies, WiredDependencies, WiringError, WiringResult};

//! Port interfaces for the application layer
//!
//! Ports define the contract between the session/flag stores and the
//! external collaborators: the GraphQL auth backend, the connectivity
//! probe, the key/value store and the navigation host. Infrastructure and
//! platform layers implement them; nothing in this crate does IO.

pub mod app_dirs;
pub mod auth_backend;
mod clock;
pub mod connectivity;
pub mod errors;
pub mod navigation_host;
pub mod persistent_store;

pub use app_dirs::AppDirsPort;
pub use auth_backend::AuthBackendPort;
pub use clock::ClockPort;
pub use connectivity::ConnectivityProbePort;
pub use errors::AppDirsError;
pub use navigation_host::NavigationHostPort;
pub use persistent_store::PersistentStorePort;

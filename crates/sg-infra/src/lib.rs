//! Infrastructure adapters for SessionGate.
//!
//! Concrete implementations of the `sg-core` ports: key/value storage,
//! connectivity flag, the GraphQL auth backend, app directories and the
//! system clock.

pub mod auth;
pub mod fs;
pub mod network;
pub mod storage;
pub mod time;

pub use auth::{GraphqlAuthBackend, GraphqlBackendError};
pub use fs::DirsAppDirsAdapter;
pub use network::AtomicConnectivity;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use time::SystemClock;

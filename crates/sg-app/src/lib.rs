//! SessionGate Application Layer
//!
//! Session and flag stores, the navigation guard that keeps the mounted
//! stack in line with them, and the use cases the UI calls.

pub mod app;
pub mod bindings;
pub mod deps;
pub mod navigation;
pub mod state;
pub mod usecases;

pub use app::App;
pub use bindings::{AppFlagsBinding, SessionBinding, UiBindings};
pub use deps::AppDeps;
pub use navigation::NavigationGuard;
pub use state::{AppFlagsStore, PersistError, SessionStore, StateChangeListener};

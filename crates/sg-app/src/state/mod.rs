//! Explicit state containers
//!
//! The stores are passed by `Arc` to whoever needs them; there is no
//! process-wide instance.

mod app_flags_store;
mod errors;
mod listeners;
mod session_store;

pub use app_flags_store::{AppFlagsStore, LoadingGuard};
pub use errors::PersistError;
pub use listeners::{ChangeListeners, StateChangeListener};
pub use session_store::{SessionSnapshot, SessionStore};

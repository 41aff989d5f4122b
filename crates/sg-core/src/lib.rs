//! # sg-core
//!
//! Core domain models and decision logic for SessionGate.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the session and flag models, the failure classifier, the navigation
//! decision function and the ports every adapter implements.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod flags;
pub mod ids;
pub mod navigation;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::ClientConfig;
pub use error::{classify, classify_message, classify_with, ErrorKind, ErrorReport, Failure};
pub use flags::{AppFlags, PersistedFlags};
pub use ids::UserId;
pub use navigation::{decide, NavigationTarget};
pub use session::{AuthError, Credentials, Session, TokenPair, VerificationUpdate};

//! Application flags
//!
//! [`AppFlags`] mixes transient UI state with the one flag that survives a
//! restart. [`PersistedFlags`] is the explicit serialization boundary: only
//! that subset is ever written to storage.

mod persisted;

pub use persisted::{PersistedFlags, CURRENT_SCHEMA_VERSION, PERSISTED_FLAGS_KEY};

use crate::error::ErrorReport;

/// UI-facing flags. Transient fields start neutral on cold start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppFlags {
    pub is_loading: bool,
    pub last_error: Option<ErrorReport>,
    pub is_onboarded: bool,
}

impl AppFlags {
    /// Cold-start flags from the persisted subset.
    pub fn from_persisted(persisted: &PersistedFlags) -> Self {
        Self {
            is_onboarded: persisted.is_onboarded,
            ..Self::default()
        }
    }

    pub fn to_persisted(&self) -> PersistedFlags {
        PersistedFlags {
            is_onboarded: self.is_onboarded,
            ..PersistedFlags::default()
        }
    }
}

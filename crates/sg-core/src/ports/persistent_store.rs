//! Key/value persistence port
//!
//! Used only for the persisted slice of the app flags. Implementations must
//! make `set` all-or-nothing: after a failed write, `get` returns the
//! previous value.

use async_trait::async_trait;

#[async_trait]
pub trait PersistentStorePort: Send + Sync {
    /// Read a value, `None` when the key was never written.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a value.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

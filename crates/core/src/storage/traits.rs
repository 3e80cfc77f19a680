use async_trait::async_trait;

use crate::errors::CoreError;

/// The opaque string-keyed store the ledger persists into.
///
/// Each platform implements this over its own storage bridge (on-device
/// key-value storage, browser localStorage, an in-process map). Values
/// are opaque text; the ledger adapter decides what goes in them.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    /// Failures are reported as [`CoreError::StorageRead`].
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write `value` under `key`, replacing any previous value.
    /// Failures are reported as [`CoreError::StorageWrite`].
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

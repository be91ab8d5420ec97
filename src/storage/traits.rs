use async_trait::async_trait;

use crate::utils::Result;

/// Durable string key-value storage backing the session
///
/// Mirrors the async get/set/remove surface a mobile host exposes. Removing a
/// key that does not exist must succeed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`
    async fn remove_item(&self, key: &str) -> Result<()>;
}

use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`InventoryStore`](super::InventoryStore) handles the "what" (collections, defaults,
/// statistics). Values are opaque strings; the store decides what goes in them.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the key has never been written or was removed.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key` wholesale.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.read(key)?.is_some())
    }

    /// Where this backend keeps its data.
    /// For FsBackend, this is the real directory. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}

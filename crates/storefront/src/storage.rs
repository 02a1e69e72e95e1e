//! Persistent key-value storage behind the cart.
//!
//! The contract mirrors the browser's origin-scoped local storage:
//! synchronous string-valued reads and writes that outlive a page
//! visit. Capacity limits exist in real hosts but exceeding them is
//! not handled here, matching the page's behavior.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Synchronous string-valued key-value storage.
///
/// The cart reads its key once at hydration and rewrites the whole
/// value on every mutation; it never writes incrementally.
pub trait StorageAdapter {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Delete the value stored under `key`, if any.
    fn remove(&mut self, key: &str);
}

/// In-memory storage shared between handles.
///
/// Clones view the same underlying store, the way every script on a
/// page sees the same origin-scoped storage. Keep a clone when a test
/// needs to inspect what the cart persisted or to hydrate a second
/// cart from the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);

        storage.set("k", "v1");
        assert_eq!(storage.get("k"), Some("v1".to_string()));

        storage.set("k", "v2");
        assert_eq!(storage.get("k"), Some("v2".to_string()));

        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn test_clones_share_state() {
        let mut storage = MemoryStorage::new();
        let reader = storage.clone();

        storage.set("cart", "[]");
        assert_eq!(reader.get("cart"), Some("[]".to_string()));
    }
}

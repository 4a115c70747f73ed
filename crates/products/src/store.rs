//! In-memory product store.
//!
//! One `RwLock` guards the whole map: lookups take the shared side and can run
//! side by side, writes take the exclusive side. Every operation is a single
//! map call inside the guard, so nothing blocks while the lock is held and no
//! caller can see a record that is half written.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::product::{Product, ProductId};
use crate::seed::seed_products;

/// Process-wide catalog storage, shared with request handlers as `Arc<ProductStore>`.
#[derive(Debug, Default)]
pub struct ProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Build a store already holding the seed records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed();
        store
    }

    /// Load the fixed seed records.
    ///
    /// Takes `&mut self`, so it can only run before the store is shared.
    pub fn seed(&mut self) {
        let map = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        map.extend(seed_products());
        tracing::debug!(records = map.len(), "product store seeded");
    }

    /// Insert or replace the record at `id`.
    ///
    /// This is an unconditional upsert; callers that require the key to exist
    /// check with [`ProductStore::exists`] first.
    pub fn update(&self, id: ProductId, product: Product) {
        let replaced = self.write().insert(id, product).is_some();
        tracing::debug!(product_id = %id, replaced, "product stored");
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.read().get(&id).cloned()
    }

    pub fn exists(&self, id: ProductId) -> bool {
        self.read().contains_key(&id)
    }

    /// Remove the record at `id`, returning whether it was present.
    pub fn delete(&self, id: ProductId) -> bool {
        let removed = self.write().remove(&id).is_some();
        if removed {
            tracing::debug!(product_id = %id, "product deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic can only interrupt a single insert/remove, which leaves the map
    // consistent, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

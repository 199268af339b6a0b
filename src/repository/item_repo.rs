//! Item Repository
//!
//! Persistence gateway for the entry list: a serialized JSON array of
//! name/quantity records under one fixed key. Identifiers are not
//! persisted; the store re-derives them at load time.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, Item, RawQuantity};
use super::traits::KeyValueStore;

/// The single key the app uses in the durable store.
pub const ITEMS_KEY: &str = "items";

/// Persisted form of one entry. No identifier; the quantity keeps its
/// raw shape so payloads written by older writers (string quantities)
/// replay through the normal coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedItem {
    pub name: String,
    pub quantity: RawQuantity,
}

impl From<&Item> for PersistedItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.into(),
        }
    }
}

/// Gateway between the in-memory list and the key/value backend.
///
/// Knows the fixed key and the payload shape, nothing about identifiers
/// or aggregates. A malformed payload degrades to an empty list (and gets
/// overwritten by the next successful append); backend failures propagate.
pub struct ItemRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append one record: read the current array, push, write back.
    ///
    /// Read-modify-write with no atomicity beyond the backend's own; a
    /// second concurrent writer would lose appends. Single-process use
    /// only.
    pub fn store_item(&mut self, item: &PersistedItem) -> DomainResult<()> {
        let mut items = self.items_from_storage()?;
        items.push(item.clone());

        let payload = serde_json::to_string(&items)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        self.store.set(ITEMS_KEY, &payload)
    }

    /// Read every persisted record, stored order. Absent key means an
    /// empty list.
    pub fn items_from_storage(&self) -> DomainResult<Vec<PersistedItem>> {
        let payload = match self.store.get(ITEMS_KEY)? {
            Some(payload) => payload,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&payload) {
            Ok(items) => Ok(items),
            Err(e) => {
                log::warn!("malformed payload under '{}', treating as empty: {}", ITEMS_KEY, e);
                Ok(Vec::new())
            }
        }
    }
}

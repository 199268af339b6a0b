//! Item Store
//!
//! Owns the canonical in-memory entry list, assigns identifiers and
//! recomputes the aggregate. Single instance per process, constructed by
//! the commands layer and used from one thread only.

use serde::Serialize;

use super::item::{Item, Quantity, RawQuantity};

/// Diagnostic snapshot of the store contents, `{ items, total }`.
/// Drives no decision logic.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub items: Vec<Item>,
    pub total: Quantity,
}

/// The authoritative in-memory entry list plus the derived aggregate.
///
/// Identifiers come from an explicit monotonic counter, so they stay
/// unique even if the list is ever reordered.
pub struct ItemStore {
    items: Vec<Item>,
    total: Quantity,
    next_id: u32,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total: Quantity::Value(0),
            next_id: 0,
        }
    }

    /// Read-only view of the current list, insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Create an entry, append it and return a copy of it.
    ///
    /// The quantity is coerced here, once; the name is taken verbatim.
    /// Presence validation is the caller's job.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: impl Into<RawQuantity>) -> Item {
        let id = self.next_id;
        self.next_id += 1;

        let item = Item::new(id, name.into(), quantity.into().coerce());
        self.items.push(item.clone());
        item
    }

    /// Recompute the aggregate from the full list, store and return it.
    ///
    /// A sentinel quantity anywhere in the list makes the whole total the
    /// sentinel. An empty list totals zero.
    pub fn total_quantity(&mut self) -> Quantity {
        self.total = self
            .items
            .iter()
            .fold(Quantity::Value(0), |acc, item| acc + item.quantity);
        self.total
    }

    /// Diagnostic `{ items, total }` snapshot.
    pub fn log_data(&self) -> StoreSnapshot {
        log::debug!("store snapshot: {} items, total {}", self.items.len(), self.total);
        StoreSnapshot {
            items: self.items.clone(),
            total: self.total,
        }
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_zero_then_sequential() {
        let mut store = ItemStore::new();
        assert_eq!(store.add_item("Cookie", "400").id, 0);
        assert_eq!(store.add_item("Eggs", "300").id, 1);
        assert_eq!(store.add_item("Steak", "1200").id, 2);
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let mut store = ItemStore::new();
        let ids: Vec<u32> = (0..20).map(|i| store.add_item(format!("item {}", i), i).id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_items_preserve_insertion_order() {
        let mut store = ItemStore::new();
        store.add_item("a", 1);
        store.add_item("b", 2);
        let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_total_is_sum_of_quantities() {
        let mut store = ItemStore::new();
        assert_eq!(store.total_quantity(), Quantity::Value(0));

        store.add_item("Cookie", "400");
        assert_eq!(store.total_quantity(), Quantity::Value(400));

        store.add_item("Eggs", "300");
        assert_eq!(store.total_quantity(), Quantity::Value(700));
    }

    #[test]
    fn test_sentinel_entry_makes_total_sentinel() {
        let mut store = ItemStore::new();
        store.add_item("Cookie", "400");
        store.add_item("Mystery", "abc");
        assert!(store.total_quantity().is_nan());
    }

    #[test]
    fn test_log_data_reflects_current_state() {
        let mut store = ItemStore::new();
        store.add_item("Cookie", "400");
        store.total_quantity();

        let snapshot = store.log_data();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.total, Quantity::Value(400));
    }
}

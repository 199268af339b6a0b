//! Item Commands
//!
//! Startup reconciliation and the add-item transaction. Owns the store,
//! the repository and the view handle; owns no entry data itself.

use crate::domain::{DomainResult, ItemStore};
use crate::repository::{ItemRepository, KeyValueStore, PersistedItem};
use super::view::ItemView;

/// Result of the add-item transaction.
///
/// `MissingInput` replaces the historical silent no-op: a presentation
/// layer that ignores the outcome observes the exact same behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(crate::domain::Item),
    MissingInput,
}

/// Application controller: sequences everything between the view and the
/// data layer.
pub struct App<S: KeyValueStore, V: ItemView> {
    store: ItemStore,
    repo: ItemRepository<S>,
    view: V,
}

impl<S: KeyValueStore, V: ItemView> App<S, V> {
    pub fn new(repo: ItemRepository<S>, view: V) -> Self {
        Self {
            store: ItemStore::new(),
            repo,
            view,
        }
    }

    /// Startup reconciliation: replay every persisted record, in stored
    /// order, through the store, then present the list and the aggregate.
    ///
    /// Identifiers are re-derived during the replay; nothing persisted
    /// carries one.
    pub fn init(&mut self) -> DomainResult<()> {
        log::info!("initializing app");

        for record in self.repo.items_from_storage()? {
            self.store.add_item(record.name, record.quantity);
        }

        self.view.render_items(self.store.items());
        let total = self.store.total_quantity();
        self.view.render_total(total);
        Ok(())
    }

    /// The add-item transaction.
    ///
    /// Proceeds only if both inputs are non-empty, then runs the fixed
    /// sequence: create entry, append it to the view, recompute and
    /// render the aggregate, persist the new record, clear the inputs.
    pub fn add_item_submit(&mut self) -> DomainResult<AddOutcome> {
        let input = self.view.item_input();
        if input.name.is_empty() || input.quantity.is_empty() {
            log::debug!("add rejected: missing name or quantity input");
            return Ok(AddOutcome::MissingInput);
        }

        let item = self.store.add_item(input.name, input.quantity);

        self.view.append_item(&item);
        let total = self.store.total_quantity();
        self.view.render_total(total);
        self.repo.store_item(&PersistedItem::from(&item))?;
        self.view.clear_input();

        Ok(AddOutcome::Added(item))
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn repository(&self) -> &ItemRepository<S> {
        &self.repo
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, Quantity};
    use crate::repository::{MemoryStore, SqliteStore, ITEMS_KEY};
    use super::super::view::ItemInput;

    /// Records every call the handlers make against it.
    #[derive(Default)]
    struct TestView {
        name: String,
        quantity: String,
        rendered: Vec<Vec<Item>>,
        appended: Vec<Item>,
        totals: Vec<Quantity>,
        clears: usize,
    }

    impl TestView {
        fn with_input(name: &str, quantity: &str) -> Self {
            Self {
                name: name.to_string(),
                quantity: quantity.to_string(),
                ..Self::default()
            }
        }
    }

    impl ItemView for TestView {
        fn item_input(&self) -> ItemInput {
            ItemInput {
                name: self.name.clone(),
                quantity: self.quantity.clone(),
            }
        }

        fn render_items(&mut self, items: &[Item]) {
            self.rendered.push(items.to_vec());
        }

        fn append_item(&mut self, item: &Item) {
            self.appended.push(item.clone());
        }

        fn render_total(&mut self, total: Quantity) {
            self.totals.push(total);
        }

        fn clear_input(&mut self) {
            self.name.clear();
            self.quantity.clear();
            self.clears += 1;
        }
    }

    fn memory_app(view: TestView) -> App<MemoryStore, TestView> {
        App::new(ItemRepository::new(MemoryStore::new()), view)
    }

    #[test]
    fn test_add_flow_end_to_end() {
        let mut app = memory_app(TestView::with_input("Cookie", "400"));

        let outcome = app.add_item_submit().unwrap();
        let added = match outcome {
            AddOutcome::Added(item) => item,
            other => panic!("expected Added, got {:?}", other),
        };
        assert_eq!(added, Item::new(0, "Cookie".to_string(), Quantity::Value(400)));
        assert_eq!(app.view().totals.last(), Some(&Quantity::Value(400)));
        assert_eq!(app.view().clears, 1);

        app.view_mut().name = "Eggs".to_string();
        app.view_mut().quantity = "300".to_string();

        let outcome = app.add_item_submit().unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Added(Item::new(1, "Eggs".to_string(), Quantity::Value(300)))
        );
        assert_eq!(app.view().totals.last(), Some(&Quantity::Value(700)));

        // Both records made it to the durable mirror, in order
        let persisted = app.repository().items_from_storage().unwrap();
        let names: Vec<&str> = persisted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cookie", "Eggs"]);
    }

    #[test]
    fn test_missing_name_is_a_no_op() {
        let mut app = memory_app(TestView::with_input("", "400"));

        assert_eq!(app.add_item_submit().unwrap(), AddOutcome::MissingInput);

        assert!(app.store().items().is_empty());
        assert!(app.repository().items_from_storage().unwrap().is_empty());
        assert!(app.view().appended.is_empty());
        assert_eq!(app.view().clears, 0);
    }

    #[test]
    fn test_missing_quantity_is_a_no_op() {
        let mut app = memory_app(TestView::with_input("Cookie", ""));
        assert_eq!(app.add_item_submit().unwrap(), AddOutcome::MissingInput);
        assert!(app.store().items().is_empty());
    }

    #[test]
    fn test_init_replays_string_quantity_as_sentinel() {
        let mut kv = MemoryStore::new();
        kv.set(ITEMS_KEY, r#"[{"name":"A","quantity":"abc"}]"#).unwrap();

        let mut app = App::new(ItemRepository::new(kv), TestView::default());
        app.init().unwrap();

        let items = app.store().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 0);
        assert!(items[0].quantity.is_nan());
        assert_eq!(app.view().totals.last(), Some(&Quantity::NotANumber));
        assert_eq!(app.view().rendered.len(), 1);
    }

    #[test]
    fn test_entries_survive_restart_with_fresh_ids() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("track_all.db");

        {
            let repo = ItemRepository::new(SqliteStore::open(&db_path).unwrap());
            let mut app = App::new(repo, TestView::with_input("Cookie", "400"));
            app.add_item_submit().unwrap();
            app.view_mut().name = "Eggs".to_string();
            app.view_mut().quantity = "300".to_string();
            app.add_item_submit().unwrap();
        }

        let repo = ItemRepository::new(SqliteStore::open(&db_path).unwrap());
        let mut app = App::new(repo, TestView::default());
        app.init().unwrap();

        let items = app.store().items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Item::new(0, "Cookie".to_string(), Quantity::Value(400)));
        assert_eq!(items[1], Item::new(1, "Eggs".to_string(), Quantity::Value(300)));
        assert_eq!(app.view().totals.last(), Some(&Quantity::Value(700)));
    }
}

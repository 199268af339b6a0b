//! Track-All Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Command handlers driven by the presentation layer
//!
//! The presentation layer lives in the host; it implements [`ItemView`]
//! and calls [`App::add_item_submit`] / [`App::init`] from its event
//! handlers.

use std::path::Path;

mod domain;
mod repository;
mod commands;

pub use domain::{DomainError, DomainResult, Item, ItemStore, Quantity, RawQuantity, StoreSnapshot};
pub use repository::{ItemRepository, KeyValueStore, MemoryStore, PersistedItem, SqliteStore};
pub use commands::{AddOutcome, App, ItemInput, ItemView};

/// Open the durable store at `db_path`, replay persisted entries and
/// return the ready-to-use controller.
pub fn init_app<V: ItemView>(db_path: &Path, view: V) -> DomainResult<App<SqliteStore, V>> {
    let store = SqliteStore::open(db_path)?;
    let mut app = App::new(ItemRepository::new(store), view);
    app.init()?;
    Ok(app)
}

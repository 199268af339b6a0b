//! Presentation Contract
//!
//! The narrow interface the presentation layer implements. The command
//! handlers drive it; the host owns the event loop and calls back into
//! [`crate::App`] when the user acts.

use crate::domain::{Item, Quantity};

/// Raw text of the two input fields, read on demand.
#[derive(Debug, Clone)]
pub struct ItemInput {
    pub name: String,
    pub quantity: String,
}

/// What the command handlers need from the UI.
pub trait ItemView {
    /// Current contents of the name and quantity inputs
    fn item_input(&self) -> ItemInput;

    /// Render the full entry list (startup population)
    fn render_items(&mut self, items: &[Item]);

    /// Append one rendered entry without a full re-render
    fn append_item(&mut self, item: &Item);

    /// Render the aggregate value
    fn render_total(&mut self, total: Quantity);

    /// Clear both input fields
    fn clear_input(&mut self);
}

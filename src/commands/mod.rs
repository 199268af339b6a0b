//! Commands Layer
//!
//! Command handlers that bridge the presentation layer to the data layer.

mod item_cmd;
mod view;

pub use item_cmd::{AddOutcome, App};
pub use view::{ItemInput, ItemView};

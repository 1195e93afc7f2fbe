//! Item system
//!
//! Item model, status derivation, and the session catalog.

pub mod catalog;
pub mod item;

pub use catalog::{Catalog, CatalogError, ToggleOutcome};
pub use item::{Item, ItemCategory, ItemIcon, ItemStatus};

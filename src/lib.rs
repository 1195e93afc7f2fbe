//! Suitdeck - a sci-fi operator console for the terminal
//!
//! A tabbed status console: stats, inventory, map and mission readouts
//! rendered from page fragments, backed by a JSON item catalog with
//! one-equipped-per-category semantics.

pub mod data;
pub mod items;
pub mod nav;
pub mod pages;
pub mod ui;
pub mod web;

// Re-export commonly used types
pub use items::{Catalog, Item, ItemCategory};
pub use nav::{Fragment, Router};
pub use ui::App;

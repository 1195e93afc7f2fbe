//! Terminal UI
//!
//! The application shell, input cooldown, and widgets.

pub mod app;
pub mod cooldown;
pub mod widgets;

pub use app::{App, CatalogSlot};
pub use cooldown::Cooldown;

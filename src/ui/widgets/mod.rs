//! UI widgets

pub mod inventory_grid;

pub use inventory_grid::InventoryWidget;

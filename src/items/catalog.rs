//! Item catalog
//!
//! Owned container for the session's items. All equip-state mutation goes
//! through `toggle_equip`, which enforces the one-equipped-per-category rule.

use std::collections::HashSet;

use thiserror::Error;

use super::item::Item;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id '{0}' in catalog")]
    DuplicateId(String),
}

/// Outcome of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Item is now equipped; every other item in its category was released
    Equipped,
    /// Item was equipped and is now released, with no replacement
    Unequipped,
    /// Locked and consumable items never change state
    Ignored,
    /// No item with the requested id
    UnknownItem,
}

/// The full in-memory item collection for the current session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items that render. Invisible entries are excluded entirely, not
    /// merely dimmed.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.visible)
    }

    /// Toggle the equipped state of an item.
    ///
    /// Equipping releases every other item sharing the category (a linear
    /// scan; fine at catalog scale). Unequipping selects no replacement.
    pub fn toggle_equip(&mut self, id: &str) -> ToggleOutcome {
        let Some(idx) = self.items.iter().position(|i| i.id == id) else {
            return ToggleOutcome::UnknownItem;
        };

        if !self.items[idx].can_toggle() {
            return ToggleOutcome::Ignored;
        }

        if self.items[idx].equipped {
            self.items[idx].equipped = false;
            return ToggleOutcome::Unequipped;
        }

        let category = self.items[idx].category;
        for (i, item) in self.items.iter_mut().enumerate() {
            if i == idx {
                item.equipped = true;
            } else if item.category == category {
                item.equipped = false;
            }
        }
        ToggleOutcome::Equipped
    }
}

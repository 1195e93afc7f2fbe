//! Item definitions
//!
//! Core item model plus the status and icon derivation rules.

use serde::{Deserialize, Serialize};

/// Item categories as they appear in the catalog document.
///
/// Tags are lowercase in the JSON; anything unrecognized lands in `Other`
/// instead of failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Suit,
    Weapon,
    Visor,
    Consumable,
    Artifact,
    #[serde(other)]
    Other,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Suit => "Suit",
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Visor => "Visor",
            ItemCategory::Consumable => "Consumable",
            ItemCategory::Artifact => "Artifact",
            ItemCategory::Other => "Other",
        }
    }

    /// Consumables never participate in equip/unequip.
    pub fn is_equippable(&self) -> bool {
        !matches!(self, ItemCategory::Consumable)
    }
}

/// Derived display state of an item entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Locked,
    Equipped,
    Available,
}

impl ItemStatus {
    /// Uppercase label shown next to the entry
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Locked => "LOCKED",
            ItemStatus::Equipped => "EQUIPPED",
            ItemStatus::Available => "AVAILABLE",
        }
    }

    /// Whether the entry's status indicator lights up
    pub fn is_active(&self) -> bool {
        matches!(self, ItemStatus::Equipped)
    }
}

/// Resolved graphic for an item entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemIcon {
    /// Explicit image reference, relative to the items image base directory
    Asset(String),
    /// Default graphic for a category that defines one
    Category(ItemCategory),
    /// Generic placeholder
    Fallback,
}

impl ItemIcon {
    /// Terminal glyph for the resolved icon
    pub fn glyph(&self) -> char {
        match self {
            ItemIcon::Asset(_) => '◈',
            ItemIcon::Category(ItemCategory::Suit) => '⛨',
            ItemIcon::Category(ItemCategory::Weapon) => '†',
            ItemIcon::Category(ItemCategory::Visor) => '◉',
            ItemIcon::Category(_) | ItemIcon::Fallback => '▢',
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique id within the catalog
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ItemCategory,
    /// Optional explicit icon reference
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub equipped: bool,
    /// Invisible items are excluded from rendering entirely
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            icon: None,
            locked: false,
            equipped: false,
            visible: true,
        }
    }

    /// Derive the display status. Pure: depends only on (locked, category,
    /// equipped). Consumables always read AVAILABLE, even when flagged
    /// equipped in the source document.
    pub fn status(&self) -> ItemStatus {
        if self.locked {
            ItemStatus::Locked
        } else if self.category == ItemCategory::Consumable {
            ItemStatus::Available
        } else if self.equipped {
            ItemStatus::Equipped
        } else {
            ItemStatus::Available
        }
    }

    /// Whether user interaction may change this item's equipped state
    pub fn can_toggle(&self) -> bool {
        !self.locked && self.category.is_equippable()
    }

    /// Resolve the entry graphic: explicit reference first, then the
    /// category default, then the generic placeholder.
    pub fn icon(&self) -> ItemIcon {
        if let Some(icon) = &self.icon {
            if !icon.trim().is_empty() {
                return ItemIcon::Asset(icon.clone());
            }
        }
        match self.category {
            ItemCategory::Suit | ItemCategory::Weapon | ItemCategory::Visor => {
                ItemIcon::Category(self.category)
            }
            _ => ItemIcon::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: ItemCategory, locked: bool, equipped: bool) -> Item {
        let mut it = Item::new("x", "X", category);
        it.locked = locked;
        it.equipped = equipped;
        it
    }

    #[test]
    fn test_status_locked_wins() {
        assert_eq!(item(ItemCategory::Suit, true, true).status(), ItemStatus::Locked);
        assert_eq!(item(ItemCategory::Consumable, true, false).status(), ItemStatus::Locked);
    }

    #[test]
    fn test_status_consumable_never_equipped() {
        // Even a consumable flagged equipped reads AVAILABLE
        assert_eq!(
            item(ItemCategory::Consumable, false, true).status(),
            ItemStatus::Available
        );
    }

    #[test]
    fn test_status_equipped_and_available() {
        assert_eq!(item(ItemCategory::Suit, false, true).status(), ItemStatus::Equipped);
        assert_eq!(item(ItemCategory::Suit, false, false).status(), ItemStatus::Available);
    }

    #[test]
    fn test_status_is_pure() {
        let a = item(ItemCategory::Weapon, false, true);
        let first = a.status();
        for _ in 0..10 {
            assert_eq!(a.status(), first);
        }
    }

    #[test]
    fn test_icon_explicit_reference_wins() {
        let mut it = item(ItemCategory::Suit, false, false);
        it.icon = Some("varia.png".to_string());
        assert_eq!(it.icon(), ItemIcon::Asset("varia.png".to_string()));
    }

    #[test]
    fn test_icon_blank_reference_falls_through() {
        let mut it = item(ItemCategory::Weapon, false, false);
        it.icon = Some("   ".to_string());
        assert_eq!(it.icon(), ItemIcon::Category(ItemCategory::Weapon));
    }

    #[test]
    fn test_icon_category_defaults() {
        assert_eq!(
            item(ItemCategory::Visor, false, false).icon(),
            ItemIcon::Category(ItemCategory::Visor)
        );
        assert_eq!(item(ItemCategory::Consumable, false, false).icon(), ItemIcon::Fallback);
        assert_eq!(item(ItemCategory::Artifact, false, false).icon(), ItemIcon::Fallback);
    }

    #[test]
    fn test_unknown_category_tag_maps_to_other() {
        let json = r#"{"id":"z","name":"Z","category":"gadget"}"#;
        let it: Item = serde_json::from_str(json).unwrap();
        assert_eq!(it.category, ItemCategory::Other);
        assert!(it.visible);
        assert!(!it.locked);
    }
}

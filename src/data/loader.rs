//! Catalog loader
//!
//! Reads the item catalog JSON document and builds the session `Catalog`.
//! There is no retry and no fallback data: a failed load is reported to the
//! caller, who logs it and leaves the inventory empty.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::items::{Catalog, CatalogError, Item};

/// Default location of the catalog document
pub const DEFAULT_CATALOG_PATH: &str = "assets/items/items.json";

/// Top-level shape of the catalog document
#[derive(Debug, Deserialize)]
struct CatalogDoc {
    items: Vec<Item>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load and validate a catalog document from disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse a catalog document from its JSON text.
pub fn parse_catalog(content: &str) -> Result<Catalog, LoadError> {
    let doc: CatalogDoc = serde_json::from_str(content)?;
    Ok(Catalog::new(doc.items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemCategory;
    use std::io::Write;

    const DOC: &str = r#"{
        "items": [
            {"id": "varia-shell", "name": "Varia Shell", "description": "Thermal suit", "category": "suit", "equipped": true},
            {"id": "medgel", "name": "Medgel", "category": "consumable"},
            {"id": "proto-frame", "name": "Proto Frame", "category": "suit", "visible": false}
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(DOC).unwrap();
        assert_eq!(catalog.len(), 3);

        let varia = catalog.get("varia-shell").unwrap();
        assert_eq!(varia.category, ItemCategory::Suit);
        assert!(varia.equipped);
        assert!(varia.visible);

        // Defaults fill in omitted fields
        let medgel = catalog.get("medgel").unwrap();
        assert!(!medgel.locked);
        assert!(medgel.description.is_empty());

        assert!(!catalog.get("proto-frame").unwrap().visible);
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        assert!(matches!(parse_catalog("{ items: nope"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let doc = r#"{"items": [
            {"id": "a", "name": "A", "category": "suit"},
            {"id": "a", "name": "A again", "category": "weapon"}
        ]}"#;
        assert!(matches!(parse_catalog(doc), Err(LoadError::Catalog(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(&dir.path().join("no-such.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}

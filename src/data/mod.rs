//! External data
//!
//! Catalog loading and the fixed operator profile readouts.

pub mod loader;
pub mod profile;

pub use loader::{load_catalog, LoadError, DEFAULT_CATALOG_PATH};
pub use profile::OperatorProfile;

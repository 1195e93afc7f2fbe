//! Fragment sources
//!
//! A fragment is one tab's body template, fetched by id. The filesystem
//! source maps an id to `<base>/<id>.page`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::nav::Fragment;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fragment '{0}' not found")]
    NotFound(String),
    #[error("failed to read fragment '{id}': {source}")]
    Io {
        id: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can retrieve fragment bodies.
pub trait FragmentSource: Send + Sync {
    fn fetch(&self, fragment: Fragment) -> Result<String, FetchError>;
}

/// Loads fragment bodies from a directory of `.page` files.
#[derive(Debug, Clone)]
pub struct FsFragmentSource {
    base: PathBuf,
}

impl FsFragmentSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn path_for(&self, fragment: Fragment) -> PathBuf {
        self.base.join(format!("{}.page", fragment.id()))
    }
}

impl FragmentSource for FsFragmentSource {
    fn fetch(&self, fragment: Fragment) -> Result<String, FetchError> {
        let path = self.path_for(fragment);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FetchError::NotFound(fragment.id().to_string()),
            _ => FetchError::Io {
                id: fragment.id().to_string(),
                source: e,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_reads_page_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stats.page"), "VITALS {{health}}%").unwrap();

        let source = FsFragmentSource::new(dir.path());
        let body = source.fetch(Fragment::Stats).unwrap();
        assert_eq!(body, "VITALS {{health}}%");
    }

    #[test]
    fn test_fetch_missing_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsFragmentSource::new(dir.path());
        let err = source.fetch(Fragment::Map).unwrap_err();
        assert!(matches!(err, FetchError::NotFound(id) if id == "map"));
    }
}

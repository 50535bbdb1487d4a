//! Loading raw documentation text — the storage boundary.
//!
//! The provider asks for a page at most once per class (until a bundle is
//! cached) and treats both "not present" and "load failed" as documentation
//! being unavailable. The distinction only matters for logging.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Source of raw documentation pages, addressed by resource path
/// (e.g. `org/example/BookStore.html`).
pub trait ResourceLoader: Send + Sync {
    /// `Ok(None)` means the resource does not exist; `Err` means it could
    /// not be read. The provider degrades both to absence.
    fn load(&self, resource_path: &str) -> Result<Option<String>>;
}

/// Loads documentation pages from a directory tree, the way an unpacked
/// reference-documentation archive is laid out.
#[derive(Debug, Clone)]
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirLoader { root: root.into() }
    }
}

impl ResourceLoader for DirLoader {
    fn load(&self, resource_path: &str) -> Result<Option<String>> {
        let path = self.root.join(resource_path);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }
}

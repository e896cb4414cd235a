//! Shared test infrastructure.
//!
//! Store tests work against a `ContentStore` pointed at a temporary
//! directory; the `TempDir` must be kept alive for the store's path to
//! remain valid.

use std::path::PathBuf;

use tempfile::TempDir;

use digitalhilfe::content::ContentStore;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";

/// A store whose content file does not exist yet.
pub fn temp_store() -> (TempDir, ContentStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ContentStore::new(dir.path().join("content.json"));
    (dir, store)
}

/// A store whose content file holds exactly `raw`.
pub fn temp_store_with(raw: &str) -> (TempDir, ContentStore) {
    let (dir, store) = temp_store();
    std::fs::write(store.path(), raw).expect("Failed to write test content file");
    (dir, store)
}

pub fn content_path(dir: &TempDir) -> PathBuf {
    dir.path().join("content.json")
}

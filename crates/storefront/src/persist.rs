//! Opaque blob persistence.
//!
//! Session state survives restarts as two independently named blobs:
//! [`CART_BLOB`] (the cart lines) and [`ORDERS_BLOB`] (the order history).
//! Each blob is loaded whole on startup and overwritten whole on every
//! mutation. There is no transactional grouping; a crash between two rapid
//! mutations may lose the earlier write, which is acceptable here.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage namespace for the persisted cart lines.
pub const CART_BLOB: &str = "cart-store";

/// Storage namespace for the persisted order history.
pub const ORDERS_BLOB: &str = "orders-store";

/// A named whole-blob store.
pub trait BlobStore: Send + Sync {
    /// Read the blob with the given name, if it exists and is readable.
    fn load(&self, name: &str) -> Option<String>;

    /// Overwrite the blob with the given name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the write fails; callers treat saves as
    /// fire-and-forget and only log the failure.
    fn save(&self, name: &str, contents: &str) -> std::io::Result<()>;
}

/// File-backed blob store: one `<name>.json` file per blob under a data
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl BlobStore for FileStore {
    fn load(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.path(name)).ok()
    }

    fn save(&self, name: &str, contents: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(name), contents)
    }
}

/// In-memory blob store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, name: &str) -> Option<String> {
        let blobs = self
            .blobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        blobs.get(name).cloned()
    }

    fn save(&self, name: &str, contents: &str) -> std::io::Result<()> {
        let mut blobs = self
            .blobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        blobs.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn cleanup(dir: &Path) {
        let _ = std::fs::remove_dir_all(dir);
    }

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("phonestore-persist-{tag}-{}", std::process::id()))
    }

    #[test]
    fn file_store_round_trips_blobs() {
        let dir = temp_dir("roundtrip");
        cleanup(&dir);
        let store = FileStore::new(&dir);

        assert!(store.load(CART_BLOB).is_none());
        store.save(CART_BLOB, r#"{"items":[]}"#).expect("save");
        assert_eq!(store.load(CART_BLOB).as_deref(), Some(r#"{"items":[]}"#));

        // Whole-blob overwrite, not append.
        store.save(CART_BLOB, "{}").expect("save");
        assert_eq!(store.load(CART_BLOB).as_deref(), Some("{}"));

        cleanup(&dir);
    }

    #[test]
    fn blobs_are_independent_namespaces() {
        let store = MemoryStore::new();
        store.save(CART_BLOB, "cart").expect("save");
        store.save(ORDERS_BLOB, "orders").expect("save");

        assert_eq!(store.load(CART_BLOB).as_deref(), Some("cart"));
        assert_eq!(store.load(ORDERS_BLOB).as_deref(), Some("orders"));
    }
}

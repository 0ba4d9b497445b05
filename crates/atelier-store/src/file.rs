//! JSON-file-backed cart repository.

use atelier_cart::{CartDocument, CartLine, CartRepository, CartStorageError, CART_STORAGE_KEY};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Cart repository persisting to a single JSON document on disk.
///
/// The document holds only the items array; drawer state is never
/// persisted. A missing or unreadable file loads as an empty cart.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    /// Store the cart under the fixed storage key inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", CART_STORAGE_KEY)),
        }
    }

    /// Store the cart at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartRepository for FileCartStore {
    fn load(&self) -> Vec<CartLine> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cart file unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<CartDocument>(&raw) {
            Ok(document) => document.items,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "cart file corrupt, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[CartLine]) -> Result<(), CartStorageError> {
        let document = CartDocument {
            items: items.to_vec(),
        };
        let raw = serde_json::to_string(&document)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

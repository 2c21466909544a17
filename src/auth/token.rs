//! File-backed storage for the single credential token.
//!
//! This is the only client-side persistence: one opaque bearer token. With
//! no path configured the store is purely in-memory and `load` always
//! reports no stored credential.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Stores the bearer token across application restarts.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: Option<PathBuf>,
}

impl TokenStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Read the stored token, if any. An absent or empty file means no
    /// stored credential.
    pub fn load(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let raw = fs::read_to_string(path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persist the token.
    pub fn save(&self, token: &str) -> io::Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, token)
    }

    /// Remove the stored token. Removing an already-absent token is not an
    /// error.
    pub fn clear(&self) {
        if let Some(path) = self.path.as_ref() {
            let _ = fs::remove_file(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(Some(dir.path().join("token")));

        assert!(store.load().is_none());

        store.save("t1").unwrap();
        assert_eq!(store.load().as_deref(), Some("t1"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(Some(dir.path().join("nested/dir/token")));

        store.save("t1").unwrap();
        assert_eq!(store.load().as_deref(), Some("t1"));
    }

    #[test]
    fn test_empty_file_is_no_credential() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();

        let store = TokenStore::new(Some(path));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_memory_only_store() {
        let store = TokenStore::new(None);
        store.save("t1").unwrap();
        assert!(store.load().is_none());
        store.clear();
    }
}

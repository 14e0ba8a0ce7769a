use crate::domain::ports::CartStore;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Fixed key for the whole cart, one file under the base directory.
pub const CART_FILE: &str = "cart.json";

#[derive(Debug, Clone)]
pub struct FileCartStore {
    base_path: String,
}

impl FileCartStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn cart_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(CART_FILE)
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.cart_path()) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<()> {
        let full_path = self.cart_path();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCartStore::new(temp_dir.path().to_str().unwrap().to_string());

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCartStore::new(temp_dir.path().to_str().unwrap().to_string());

        store.save(r#"[{"id":1,"amount":2}]"#).unwrap();
        let payload = store.load().unwrap().unwrap();

        assert_eq!(payload, r#"[{"id":1,"amount":2}]"#);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileCartStore::new(nested.to_str().unwrap().to_string());

        store.save("[]").unwrap();

        assert!(nested.join(CART_FILE).exists());
    }
}

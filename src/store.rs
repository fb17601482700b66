//! Durable persistence for the selected-place list
//!
//! The store owns the on-disk representation: one file holding a JSON-encoded
//! array of place-id strings, newest first. Every mutation is a whole-value
//! read-modify-write. There is exactly one writer (the UI session), so no
//! locking is needed. Failure paths degrade to an empty list or a logged
//! write error; the caller never sees an error.

use std::fs;
use std::path::PathBuf;

pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    /// Store under the per-user data directory.
    pub fn open_default() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(base.join("waypick").join("selected_places.json"))
    }

    /// Store backed by an explicit file path.
    pub fn open(path: PathBuf) -> Self {
        log::debug!("selection store at {}", path.display());
        Self { path }
    }

    /// Read the persisted id list. Missing or malformed content is an empty list.
    pub fn load(&self) -> Vec<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(err) => {
                log::warn!("discarding malformed selection data: {err}");
                Vec::new()
            }
        }
    }

    /// Prepend `id` to the persisted list unless it is already present.
    pub fn add(&self, id: &str) {
        let mut ids = self.load();
        if ids.iter().any(|stored| stored == id) {
            return;
        }
        ids.insert(0, id.to_owned());
        self.write(&ids);
    }

    /// Rewrite the persisted list with `id` excluded.
    pub fn remove(&self, id: &str) {
        let mut ids = self.load();
        let before = ids.len();
        ids.retain(|stored| stored != id);
        if ids.len() != before {
            self.write(&ids);
        }
    }

    fn write(&self, ids: &[String]) {
        if let Err(err) = self.try_write(ids) {
            log::error!("failed to save selection: {err:?}");
        }
    }

    fn try_write(&self, ids: &[String]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(ids)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

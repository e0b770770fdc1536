//! Record store — YAML persistence for record repositories.
//!
//! Each record kind lives in its own file under the store root:
//!
//! ```text
//! <root>/
//!   ├── requests.yaml
//!   └── losses.yaml
//! ```
//!
//! A missing or empty file reads as an empty repository.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::ServiceContext;
use crate::ids::HasIdentifier;
use crate::records::{InventoryRequest, LossRecord, RecordKind};
use crate::repository::Repository;

/// Persistence layer for record repositories.
///
/// All I/O goes through `ctx.fs`.
pub struct RecordStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecordStore<'a> {
    /// Creates a store rooted at `ctx.store_root`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Loads all inventory requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_requests(&self) -> Result<Repository<InventoryRequest>, String> {
        self.load(RecordKind::Request)
    }

    /// Saves all inventory requests, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save_requests(&self, repo: &Repository<InventoryRequest>) -> Result<(), String> {
        self.save(RecordKind::Request, repo)
    }

    /// Loads all loss records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_losses(&self) -> Result<Repository<LossRecord>, String> {
        self.load(RecordKind::Loss)
    }

    /// Saves all loss records, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save_losses(&self, repo: &Repository<LossRecord>) -> Result<(), String> {
        self.save(RecordKind::Loss, repo)
    }

    fn load<T>(&self, kind: RecordKind) -> Result<Repository<T>, String>
    where
        T: DeserializeOwned + HasIdentifier,
    {
        let path = self.path(kind);
        if !self.ctx.fs.exists(&path) {
            log::debug!("{} not found, starting empty", path.display());
            return Ok(Repository::new());
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Repository::new());
        }
        let items: Vec<T> = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
        log::debug!("loaded {} record(s) from {}", items.len(), path.display());
        Ok(Repository::from_vec(items))
    }

    fn save<T>(&self, kind: RecordKind, repo: &Repository<T>) -> Result<(), String>
    where
        T: Serialize + HasIdentifier,
    {
        let path = self.path(kind);
        let yaml = serde_yaml::to_string(repo.as_slice())
            .map_err(|e| format!("Failed to serialize {} records: {e}", kind.prefix()))?;
        self.ctx
            .fs
            .write(&path, &yaml)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        log::debug!("saved {} record(s) to {}", repo.len(), path.display());
        Ok(())
    }

    fn path(&self, kind: RecordKind) -> PathBuf {
        self.ctx.store_root.join(kind.file_name())
    }
}

//! Persistent preference storage using redb.
//!
//! The portal persists exactly one thing, the theme preference, but the
//! store is a plain string key-value table so the controller does not care
//! what backs it. [`MemoryStore`] is the session-only fallback used when the
//! database cannot be opened.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::PortalResult;

/// File name of the preference database inside the data directory
pub const DATABASE_FILE: &str = "portal.redb";

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Client-local key-value storage for preferences.
pub trait PreferenceStore {
    /// Read a value. Absence is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> PortalResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> PortalResult<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        (**self).set(key, value)
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the preferences table if needed.
    pub fn new(path: impl AsRef<Path>) -> PortalResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open (or create) the database inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> PortalResult<Self> {
        Self::new(data_dir.as_ref().join(DATABASE_FILE))
    }
}

impl PreferenceStore for Storage {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory store. Values live as long as the store does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

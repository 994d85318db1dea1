//! Session-scoped key/value storage for the contact gate.

use crate::contact::ContactAddress;
use crate::errors::{ReadinessError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const GATE_SATISFIED_KEY: &str = "gate_satisfied";
pub const CONTACT_KEY: &str = "contact";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: BTreeMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Session entries persisted as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing file is an empty session; an
    /// unreadable or corrupt one is discarded with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("starting a fresh session: {}", e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ReadinessError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| ReadinessError::SessionStore(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| ReadinessError::io(&self.path, e))
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents)
            .map_err(|e| ReadinessError::SessionStore(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(e) => Err(ReadinessError::io(path, e)),
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Default session file under the user cache directory.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("readiness").join("session.json"))
}

/// Gate state for one session, handed explicitly to flow handlers.
#[derive(Debug, Clone, Default)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn gate_satisfied(&self) -> bool {
        self.store.get(GATE_SATISFIED_KEY).as_deref() == Some("true")
    }

    pub fn contact(&self) -> Option<String> {
        self.store.get(CONTACT_KEY)
    }

    /// Record a successful gate submission. Both entries are written even if
    /// the first write fails; the first error is returned.
    pub fn satisfy_gate(&mut self, contact: &ContactAddress) -> Result<()> {
        let flag = self.store.set(GATE_SATISFIED_KEY, "true");
        let address = self.store.set(CONTACT_KEY, contact.as_str());
        flag.and(address)
    }
}

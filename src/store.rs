//! Read-only access to a hierarchical key-value store.
//!
//! [`ConfigStore`] opens the root scope; [`StoreScope`] walks child keys and
//! reads string values. Scopes release their handle when dropped, so nested
//! traversal closes every key on every exit path.
//!
//! [`MemoryStore`] is an in-memory store with registry semantics (backslash
//! separated paths, case-insensitive names). It backs `--snapshot` runs and
//! the unit tests.

use crate::error::ProbeError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub trait StoreScope: Sized {
    /// Open a child key by relative path. `None` when it does not exist.
    fn open_child(&self, path: &str) -> Option<Self>;

    /// Read a string value. `None` when unset or empty.
    fn read_string(&self, name: &str) -> Option<String>;
}

pub trait ConfigStore {
    type Scope<'a>: StoreScope
    where
        Self: 'a;

    fn open_root(&self) -> Result<Self::Scope<'_>, ProbeError>;
}

/// Snapshot file layout: key path -> value name -> string value.
pub type SnapshotEntries = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryKey {
    values: BTreeMap<String, String>,
    children: BTreeMap<String, MemoryKey>,
}

impl MemoryKey {
    fn child(&self, name: &str) -> Option<&MemoryKey> {
        self.children.get(&name.to_lowercase())
    }

    fn ensure_path(&mut self, path: &str) -> &mut MemoryKey {
        split_path(path).fold(self, |key, segment| {
            key.children.entry(segment.to_lowercase()).or_default()
        })
    }
}

impl<'a> StoreScope for &'a MemoryKey {
    fn open_child(&self, path: &str) -> Option<Self> {
        let mut current: &'a MemoryKey = *self;
        for segment in split_path(path) {
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn read_string(&self, name: &str) -> Option<String> {
        self.values
            .get(&name.to_lowercase())
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('\\').filter(|segment| !segment.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    root: Option<MemoryKey>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            root: Some(MemoryKey::default()),
        }
    }

    /// A store whose root scope can never be opened.
    #[cfg(test)]
    pub fn unavailable() -> Self {
        Self { root: None }
    }

    pub fn with_key(mut self, path: &str) -> Self {
        if let Some(root) = self.root.as_mut() {
            root.ensure_path(path);
        }
        self
    }

    pub fn with_value(mut self, path: &str, name: &str, value: &str) -> Self {
        if let Some(root) = self.root.as_mut() {
            root.ensure_path(path)
                .values
                .insert(name.to_lowercase(), value.to_string());
        }
        self
    }

    pub fn from_entries(entries: SnapshotEntries) -> Self {
        entries
            .into_iter()
            .fold(Self::new(), |store, (path, values)| {
                values
                    .into_iter()
                    .fold(store.with_key(&path), |store, (name, value)| {
                        store.with_value(&path, &name, &value)
                    })
            })
    }

    pub fn load_snapshot(path: &Path) -> Result<Self, ProbeError> {
        let snapshot_error = |message: String| ProbeError::Snapshot {
            path: path.to_path_buf(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| snapshot_error(e.to_string()))?;
        let entries: SnapshotEntries =
            serde_json::from_str(&content).map_err(|e| snapshot_error(e.to_string()))?;

        tracing::debug!(
            "Loaded registry snapshot with {} key(s) from {}",
            entries.len(),
            path.display()
        );
        Ok(Self::from_entries(entries))
    }
}

impl ConfigStore for MemoryStore {
    type Scope<'a> = &'a MemoryKey;

    fn open_root(&self) -> Result<Self::Scope<'_>, ProbeError> {
        self.root.as_ref().ok_or_else(|| ProbeError::StoreUnavailable {
            root: "memory store".to_string(),
            reason: "store is marked unavailable".to_string(),
        })
    }
}

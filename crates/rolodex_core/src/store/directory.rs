//! Generic keyed in-memory directory.
//!
//! # Responsibility
//! - Store entries under the key each entry derives from its own fields.
//! - Delegate bulk persistence to the binary codec.
//!
//! # Invariants
//! - Keys are unique; `add` rejects collisions before touching storage.
//! - Insertion order is preserved by the backing vector but is not part of
//!   the contract; callers must not depend on iteration order.

use crate::model::Keyed;
use crate::store::codec::{self, PersistenceResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Keyed container failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// An entry with the same key is already stored.
    DuplicateKey(String),
    /// No entry is stored under the requested key.
    NotFound(String),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "an entry keyed `{key}` already exists"),
            Self::NotFound(key) => write!(f, "no entry keyed `{key}`"),
        }
    }
}

impl Error for DirectoryError {}

/// In-memory mapping from string key to owned entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory<V> {
    entries: Vec<(String, V)>,
}

impl<V> Directory<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(stored, _)| stored == key)
    }

    /// Returns the live key set; the explicit collaborator handed to name
    /// validation.
    pub fn keys(&self) -> BTreeSet<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn get(&self, key: &str) -> DirectoryResult<&V> {
        self.entries
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, entry)| entry)
            .ok_or_else(|| DirectoryError::NotFound(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> DirectoryResult<&mut V> {
        self.entries
            .iter_mut()
            .find(|(stored, _)| stored == key)
            .map(|(_, entry)| entry)
            .ok_or_else(|| DirectoryError::NotFound(key.to_string()))
    }

    /// Removes and returns the entry under `key`.
    pub fn remove(&mut self, key: &str) -> DirectoryResult<V> {
        match self.entries.iter().position(|(stored, _)| stored == key) {
            Some(index) => Ok(self.entries.remove(index).1),
            None => Err(DirectoryError::NotFound(key.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<V: Keyed> Directory<V> {
    /// Inserts an entry under its own key; collisions are rejected.
    pub fn add(&mut self, entry: V) -> DirectoryResult<()> {
        let key = entry.key();
        if self.contains(&key) {
            return Err(DirectoryError::DuplicateKey(key));
        }
        self.entries.push((key, entry));
        Ok(())
    }

    /// Inserts or replaces the entry under its own key, returning the
    /// displaced entry if one was stored.
    pub fn put(&mut self, entry: V) -> Option<V> {
        let key = entry.key();
        match self.entries.iter().position(|(stored, _)| *stored == key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, entry)),
            None => {
                self.entries.push((key, entry));
                None
            }
        }
    }
}

impl<V: Serialize + DeserializeOwned> Directory<V> {
    /// Writes the full directory to one binary file, replacing it.
    pub fn save(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        codec::write_entries(path.as_ref(), &self.entries)
    }

    /// Restores a directory from file; a missing file yields an empty one.
    pub fn load(path: impl AsRef<Path>) -> PersistenceResult<Self> {
        Ok(Self {
            entries: codec::read_entries(path.as_ref())?,
        })
    }
}

impl<V> Default for Directory<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Note book use-case service.
//!
//! # Responsibility
//! - Provide the note-level API surface over the tag-keyed directory.
//!
//! # Invariants
//! - Notes are keyed by tag signature; adding a note whose tag set matches
//!   an existing one displaces the stored note and hands it back.

use crate::model::note::Notification;
use crate::store::codec::PersistenceError;
use crate::store::directory::Directory;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type NoteBookResult<T> = Result<T, NoteBookError>;

/// Service error for note book operations.
#[derive(Debug)]
pub enum NoteBookError {
    /// No note is filed under the requested tag signature.
    NoteNotFound(String),
    /// Archive read/write failure.
    Persistence(PersistenceError),
}

impl Display for NoteBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(signature) => write!(f, "no note tagged `{signature}`"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteBookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<PersistenceError> for NoteBookError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Tag-signature-keyed directory of notes.
#[derive(Debug, Default)]
pub struct NoteBook {
    directory: Directory<Notification>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Files a note under its tag signature.
    ///
    /// Returns the displaced note when one was already filed under the
    /// same signature.
    pub fn add_note(&mut self, note: Notification) -> Option<Notification> {
        self.directory.put(note)
    }

    pub fn get(&self, signature: &str) -> NoteBookResult<&Notification> {
        self.directory
            .get(signature)
            .map_err(|_| NoteBookError::NoteNotFound(signature.to_string()))
    }

    /// Removes and returns the note under `signature`.
    pub fn remove(&mut self, signature: &str) -> NoteBookResult<Notification> {
        self.directory
            .remove(signature)
            .map_err(|_| NoteBookError::NoteNotFound(signature.to_string()))
    }

    /// Renders every note, blank-line separated.
    pub fn describe_all(&self) -> String {
        self.directory
            .iter()
            .map(|(_, note)| note.describe())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn save(&self, path: impl AsRef<Path>) -> NoteBookResult<()> {
        Ok(self.directory.save(path)?)
    }

    /// Restores a book from file; a missing file yields an empty book.
    pub fn load(path: impl AsRef<Path>) -> NoteBookResult<Self> {
        Ok(Self {
            directory: Directory::load(path)?,
        })
    }
}

//! Binary persistence codec for directory snapshots.
//!
//! # Responsibility
//! - Serialize a directory's full key-entry list into one bincode blob.
//! - Restore that list, treating a missing file as an empty directory.
//!
//! # Invariants
//! - A save call overwrites the target file in a single write.
//! - Only "file does not exist" is absorbed on load; every other I/O or
//!   decode fault propagates as `PersistenceError`.
//! - The blob layout is tied to the current entry shape; there is no
//!   cross-version migration.

use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Persistence fault distinct from simple file absence.
#[derive(Debug)]
pub enum PersistenceError {
    /// Reading or writing the archive file failed.
    Io { path: PathBuf, source: io::Error },
    /// The archive bytes could not be encoded or decoded.
    Codec {
        path: PathBuf,
        source: bincode::Error,
    },
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "archive i/o failure at `{}`: {source}", path.display())
            }
            Self::Codec { path, source } => {
                write!(f, "invalid archive at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Codec { source, .. } => Some(source),
        }
    }
}

/// Writes the full entry list as one bincode blob, replacing any existing
/// file at `path`.
pub fn write_entries<V: Serialize>(path: &Path, entries: &[(String, V)]) -> PersistenceResult<()> {
    let started_at = Instant::now();

    let blob = bincode::serialize(entries).map_err(|source| PersistenceError::Codec {
        path: path.to_path_buf(),
        source,
    })?;

    match std::fs::write(path, &blob) {
        Ok(()) => {
            info!(
                "event=book_save module=store status=ok entries={} bytes={} duration_ms={}",
                entries.len(),
                blob.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(source) => {
            error!(
                "event=book_save module=store status=error error={source} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Reads the full entry list back from `path`.
///
/// A missing file yields an empty list: first run with no saved data is an
/// expected state, not a fault.
pub fn read_entries<V: DeserializeOwned>(path: &Path) -> PersistenceResult<Vec<(String, V)>> {
    let started_at = Instant::now();

    let blob = match std::fs::read(path) {
        Ok(blob) => blob,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            info!(
                "event=book_load module=store status=missing duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }
        Err(source) => {
            error!(
                "event=book_load module=store status=error error_code=read_failed error={source} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match bincode::deserialize::<Vec<(String, V)>>(&blob) {
        Ok(entries) => {
            info!(
                "event=book_load module=store status=ok entries={} bytes={} duration_ms={}",
                entries.len(),
                blob.len(),
                started_at.elapsed().as_millis()
            );
            Ok(entries)
        }
        Err(source) => {
            error!(
                "event=book_load module=store status=error error_code=decode_failed error={source} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Err(PersistenceError::Codec {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

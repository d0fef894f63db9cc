// Chunk: docs/chunks/persistence - Whole-file load and save
//!
//! Whole-document file I/O.
//!
//! The editor always reads and writes the full document in one go. A missing
//! file is not an error when opening: it simply means the session starts a
//! new, empty document that will be created on the first save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors from loading or saving a document.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A save was requested before the document had a file name.
    #[error("no file name specified")]
    NoFileName,
}

/// Reads the whole document at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Bytes that are not valid
/// UTF-8 are replaced rather than rejected, so any file can be opened.
pub fn read_document(path: &Path) -> Result<Option<String>, PersistenceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "document does not exist yet");
            return Ok(None);
        }
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), "document is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    Ok(Some(text))
}

/// Writes `text` to `path`, replacing any existing file.
///
/// Returns the number of bytes written.
pub fn write_document(path: &Path, text: &str) -> Result<usize, PersistenceError> {
    fs::write(path, text).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "document written");
    Ok(text.len())
}

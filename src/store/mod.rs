//! Draft persistence: a directory-backed JSON mirror of the editor state.
//!
//! The store keeps two files, one for the document metadata and one for
//! the line sequence with its id counter. `save` mirrors the full
//! current state; `load` falls back to `None` on missing files or a
//! shape mismatch, so a stale or foreign draft degrades to a fresh
//! default rather than an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Document, DocumentMeta, FactuurError, LineItem};
use crate::editor::DraftObserver;

const META_FILE: &str = "draft-meta.json";
const LINES_FILE: &str = "draft-lines.json";

#[derive(Serialize, Deserialize)]
struct StoredLines {
    lines: Vec<LineItem>,
    next_line_id: u64,
}

/// File-backed draft store rooted at one directory.
pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }

    fn lines_path(&self) -> PathBuf {
        self.dir.join(LINES_FILE)
    }

    /// Mirror the full document state to disk.
    pub fn save(&self, document: &Document) -> Result<(), FactuurError> {
        fs::create_dir_all(&self.dir).map_err(store_error)?;

        let meta = serde_json::to_string_pretty(&document.meta).map_err(store_error)?;
        let lines = serde_json::to_string_pretty(&StoredLines {
            lines: document.lines.clone(),
            next_line_id: document.next_line_id,
        })
        .map_err(store_error)?;

        fs::write(self.meta_path(), meta).map_err(store_error)?;
        fs::write(self.lines_path(), lines).map_err(store_error)?;
        Ok(())
    }

    /// Load the saved draft, if a complete and well-shaped one exists.
    pub fn load(&self) -> Option<Document> {
        let meta: DocumentMeta = read_json(&self.meta_path())?;
        let stored: StoredLines = read_json(&self.lines_path())?;
        Some(Document {
            meta,
            lines: stored.lines,
            next_line_id: stored.next_line_id,
        })
    }

    /// Remove the saved draft. Removing an absent draft is fine.
    pub fn clear(&self) -> Result<(), FactuurError> {
        remove_if_present(&self.meta_path())?;
        remove_if_present(&self.lines_path())?;
        Ok(())
    }
}

/// Persistence as an effect of editing: every state transition is
/// mirrored, a discard clears the files. Write failures are swallowed
/// here so in-memory editing continues; call [`DraftStore::save`]
/// directly when the caller wants to see the error.
impl DraftObserver for DraftStore {
    fn draft_changed(&self, document: &Document) {
        let _ = self.save(document);
    }

    fn draft_discarded(&self) {
        let _ = self.clear();
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

fn remove_if_present(path: &Path) -> Result<(), FactuurError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(store_error(e)),
    }
}

fn store_error(e: impl std::fmt::Display) -> FactuurError {
    FactuurError::Store(e.to_string())
}

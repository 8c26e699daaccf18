//! JSON persistence for the flat note list.
//!
//! The on-disk format is a single object `{"notes": [...]}`, the same shape
//! the web front-end keeps in browser storage. The list is the
//! whole document — parent links and sibling order are carried by the
//! records themselves, so there is no schema beyond this wrapper.

use crate::{NestnoteError, Note, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct NotesFile {
    notes: Vec<Note>,
}

/// Reads and writes the notes file.
pub struct Storage;

impl Storage {
    /// Loads the note list from `path`.
    ///
    /// A missing file is an empty workspace, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::Io`] if the file exists but cannot be read,
    /// [`NestnoteError::Json`] if it is not valid JSON, and
    /// [`NestnoteError::InvalidStore`] if it parses but does not have the
    /// `{"notes": [...]}` shape.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Note>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        if value.get("notes").is_none() {
            return Err(NestnoteError::InvalidStore(
                "missing top-level 'notes' array".to_string(),
            ));
        }

        let file: NotesFile = serde_json::from_value(value)?;
        Ok(file.notes)
    }

    /// Writes the note list to `path` as pretty-printed JSON.
    ///
    /// The write goes to a sibling temp file first and is moved into place
    /// with a rename, so a crash mid-write leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::Io`] for any filesystem failure and
    /// [`NestnoteError::Json`] if serialization fails.
    pub fn save<P: AsRef<Path>>(path: P, notes: &[Note]) -> Result<()> {
        let path = path.as_ref();
        let file = NotesFile {
            notes: notes.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

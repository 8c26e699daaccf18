//! Error types for the Nestnote core library.
//!
//! Note that rejected drag-and-drop reorders (self-drop, cycle attempt,
//! unknown id) are *not* errors: an invalid drop target is a normal outcome
//! of a drag gesture, so [`crate::reorder`] silently returns its input
//! unchanged instead. The variants here cover the persistence layer and
//! lookups by id.

use thiserror::Error;

/// All errors that can occur within the Nestnote core library.
#[derive(Debug, Error)]
pub enum NestnoteError {
    /// An I/O operation on the notes file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored note data could not be (de)serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The opened file parsed as JSON but is not a Nestnote notes file.
    #[error("Invalid notes file: {0}")]
    InvalidStore(String),

    /// A note ID was requested that does not exist in the list.
    #[error("Note not found: {0}")]
    NoteNotFound(String),
}

/// Convenience alias that pins the error type to [`NestnoteError`].
pub type Result<T> = std::result::Result<T, NestnoteError>;

impl NestnoteError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
            Self::InvalidStore(_) => "Could not open notes file".to_string(),
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
        }
    }
}

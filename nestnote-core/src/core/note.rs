use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The serialized block-editor content of a freshly created note: one empty
/// paragraph. The core never interprets this value; it is handed through to
/// the editor unchanged.
pub const DEFAULT_CONTENT: &str = r#"[{"type":"paragraph","content":[]}]"#;

/// A single note record — one node in the forest.
///
/// The whole document tree is encoded as an *ordered* flat list of these
/// records: `parent_id` gives the parent link (`None` for a root note) and
/// the position in the list gives the sibling order. There is no separate
/// position field; two notes with the same `parent_id` render as siblings in
/// the order they appear in the list.
///
/// Field names serialize in camelCase so the on-disk JSON matches what the
/// front-end reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Opaque serialized editor content. Passed through unchanged.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub parent_id: Option<String>,
}

impl Note {
    /// Creates a new untitled note under `parent_id` (or at root for `None`)
    /// with a fresh UUID and the default empty-paragraph content.
    #[must_use]
    pub fn new(parent_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: "Untitled Note".to_string(),
            content: DEFAULT_CONTENT.to_string(),
            created_at: Utc::now(),
            parent_id,
        }
    }

    /// True when this note has no parent, i.e. it is a tree root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

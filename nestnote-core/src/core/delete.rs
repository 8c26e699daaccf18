//! Delete strategy and result types for note removal.
//!
//! Removal itself lives on [`Workspace`](super::workspace::Workspace); this
//! module defines how a deleted note's children are handled and what the
//! operation reports back.

use serde::{Deserialize, Serialize};

/// Determines how children are handled when a note is deleted.
///
/// Variants serialize as PascalCase strings (`"DeleteAll"`,
/// `"PromoteChildren"`) so the front-end can send them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum DeleteStrategy {
    /// Delete the target note and all of its descendants.
    DeleteAll,

    /// Delete only the target note; its direct children are re-parented to
    /// the deleted note's former parent, keeping their relative order.
    PromoteChildren,
}

/// The outcome of a delete operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// The number of notes permanently removed.
    pub deleted_count: usize,

    /// Ids of every note that was removed or re-parented by the operation.
    pub affected_ids: Vec<String>,
}

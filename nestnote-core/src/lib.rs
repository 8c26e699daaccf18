//! Core library for Nestnote — a local-first, hierarchical note-taking application.
//!
//! The primary entry point is [`Workspace`], which owns the authoritative flat
//! note list for one open notes file. All document mutations go through
//! `Workspace` methods; the list itself is the sole persisted representation
//! (parent/child and sibling order are both derived from `parent_id` plus
//! position in the list).
//!
//! The reordering engine underneath is exposed as three pure pieces for
//! callers that manage their own list: [`project`] (tree view),
//! [`classify_drop`] (pointer geometry to drop intent) and [`reorder`] (the
//! sole structural mutator).
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    delete::{DeleteResult, DeleteStrategy},
    drag::{classify_drop, DragSession, DropIntent, DropTarget, RowRect},
    error::{NestnoteError, Result},
    note::Note,
    reorder::reorder,
    storage::Storage,
    tree::{children, descendants, is_descendant, project, roots, TreeNode},
    workspace::Workspace,
};

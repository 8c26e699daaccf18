//! Read-only tree queries over the flat note list.
//!
//! The list is the source of truth: `parent_id` encodes the parent link and
//! list position encodes sibling order. Everything in this module is a pure
//! function of its input list; nothing here mutates.

use crate::Note;
use serde::Serialize;
use std::collections::HashSet;

/// A nested projection of the flat list, for rendering the sidebar tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    #[serde(flatten)]
    pub note: Note,
    pub children: Vec<TreeNode>,
}

/// Returns the root notes (no parent) in list order.
pub fn roots(notes: &[Note]) -> Vec<&Note> {
    notes.iter().filter(|n| n.parent_id.is_none()).collect()
}

/// Returns the direct children of `parent_id` in list order.
pub fn children<'a>(notes: &'a [Note], parent_id: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|n| n.parent_id.as_deref() == Some(parent_id))
        .collect()
}

/// Returns the set of ids transitively reachable as children of `id`.
///
/// Implemented iteratively with a visited set, so a corrupted list with a
/// parent cycle terminates instead of recursing forever. Membership only;
/// callers that need order filter the list against this set.
pub fn descendants(notes: &[Note], id: &str) -> HashSet<String> {
    let mut collected: HashSet<String> = HashSet::new();
    let mut frontier: Vec<&str> = vec![id];

    while let Some(current) = frontier.pop() {
        for child in notes
            .iter()
            .filter(|n| n.parent_id.as_deref() == Some(current))
        {
            if collected.insert(child.id.clone()) {
                frontier.push(&child.id);
            }
        }
    }

    collected
}

/// True if `ancestor_id` appears on `node_id`'s ancestor chain.
///
/// Walks `parent_id` pointers upward. The walk is bounded by the list length:
/// exceeding it means the acyclicity invariant was already broken by a prior
/// bug, which is logged as an error and reported as `true` so that callers
/// reject the move instead of making the corruption worse.
pub fn is_descendant(notes: &[Note], ancestor_id: &str, node_id: &str) -> bool {
    let mut current = node_id;
    let mut steps = 0usize;

    loop {
        let Some(note) = notes.iter().find(|n| n.id == current) else {
            return false;
        };
        let Some(parent_id) = note.parent_id.as_deref() else {
            return false;
        };
        if parent_id == ancestor_id {
            return true;
        }

        steps += 1;
        if steps > notes.len() {
            log::error!(
                "cycle detected while walking ancestors of note {node_id}: \
                 the list violates the acyclicity invariant"
            );
            return true;
        }
        current = parent_id;
    }
}

/// Projects the flat list into a nested forest, preserving list order at
/// every level.
pub fn project(notes: &[Note]) -> Vec<TreeNode> {
    let mut visited: HashSet<String> = HashSet::new();
    notes
        .iter()
        .filter(|n| n.parent_id.is_none())
        .map(|n| build_node(notes, n, &mut visited))
        .collect()
}

fn build_node(notes: &[Note], note: &Note, visited: &mut HashSet<String>) -> TreeNode {
    visited.insert(note.id.clone());
    let mut children = Vec::new();
    for n in notes
        .iter()
        .filter(|n| n.parent_id.as_deref() == Some(note.id.as_str()))
    {
        if !visited.contains(&n.id) {
            children.push(build_node(notes, n, visited));
        }
    }
    TreeNode {
        note: note.clone(),
        children,
    }
}

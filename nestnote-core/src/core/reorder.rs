//! The tree mutator: relocating a dragged subtree within the flat list.
//!
//! This is the only place structure changes. The operation is a pure
//! snapshot-in, snapshot-out computation: it either produces a fully valid
//! new list or returns the input unchanged. There are no partial states and
//! nothing is ever mutated in place — the caller replaces its authoritative
//! list wholesale with the return value.

use crate::core::tree::{descendants, is_descendant};
use crate::{DropIntent, Note};

/// Applies a classified drop to the list, producing the new list.
///
/// The dragged note moves together with all of its descendants as one
/// contiguous unit whose internal order is preserved. Only the dragged
/// note's own `parent_id` is rewritten; descendants keep theirs.
///
/// The move is rejected — the input is returned unchanged, without error —
/// when it could not produce a valid tree:
///
/// - `dragged_id` and `target_id` are the same note (self-drop),
/// - `target_id` lies inside the dragged subtree (the move would create a
///   cycle),
/// - either id does not exist in the list.
///
/// An invalid drop target is a normal end to a drag gesture, not an
/// exceptional one, so the caller sees the last-known-valid list rather
/// than an error.
#[must_use]
pub fn reorder(notes: &[Note], dragged_id: &str, target_id: &str, intent: DropIntent) -> Vec<Note> {
    if dragged_id == target_id {
        return notes.to_vec();
    }
    let Some(dragged) = notes.iter().find(|n| n.id == dragged_id) else {
        return notes.to_vec();
    };
    let Some(target) = notes.iter().find(|n| n.id == target_id) else {
        return notes.to_vec();
    };
    // Cycle prevention: a note cannot be dropped into its own subtree.
    if is_descendant(notes, dragged_id, target_id) {
        return notes.to_vec();
    }

    let new_parent_id = match intent {
        DropIntent::BecomeChild => Some(target.id.clone()),
        DropIntent::BeforeSibling | DropIntent::AfterSibling => target.parent_id.clone(),
    };

    // The dragged subtree travels as one block, keeping its internal order.
    let mut subtree_ids = descendants(notes, dragged_id);
    subtree_ids.insert(dragged.id.clone());

    let mut subtree: Vec<Note> = Vec::with_capacity(subtree_ids.len());
    let mut remainder: Vec<Note> = Vec::with_capacity(notes.len() - subtree_ids.len());
    for note in notes {
        if subtree_ids.contains(&note.id) {
            subtree.push(note.clone());
        } else {
            remainder.push(note.clone());
        }
    }
    // Shallow reparent: only the dragged note's own link changes.
    if let Some(moved) = subtree.iter_mut().find(|n| n.id == dragged_id) {
        moved.parent_id = new_parent_id;
    }

    // The target is not in the subtree (checked above), so it is present in
    // the remainder.
    let target_index = remainder
        .iter()
        .position(|n| n.id == target_id)
        .unwrap_or(remainder.len());

    let insert_index = match intent {
        DropIntent::BeforeSibling => target_index,
        DropIntent::AfterSibling => target_index + 1,
        DropIntent::BecomeChild => {
            // Append as the target's last child: skip past the run of the
            // target's existing children directly following it.
            let mut index = target_index + 1;
            while index < remainder.len()
                && remainder[index].parent_id.as_deref() == Some(target_id)
            {
                index += 1;
            }
            index
        }
    };

    remainder.splice(insert_index..insert_index, subtree);
    remainder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::{children, roots};
    use std::collections::HashSet;

    fn note(id: &str, parent: Option<&str>) -> Note {
        Note {
            id: id.to_string(),
            parent_id: parent.map(str::to_string),
            ..Note::new(None)
        }
    }

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.id.as_str()).collect()
    }

    fn parent_of<'a>(notes: &'a [Note], id: &str) -> Option<&'a str> {
        notes
            .iter()
            .find(|n| n.id == id)
            .and_then(|n| n.parent_id.as_deref())
    }

    /// The three list invariants: no dangling parents, acyclic, and sibling
    /// order derivable from list order alone.
    fn assert_valid(notes: &[Note]) {
        let known: HashSet<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        for n in notes {
            if let Some(p) = n.parent_id.as_deref() {
                assert!(known.contains(p), "dangling parent {p} on {}", n.id);
            }
            assert!(
                !crate::is_descendant(notes, n.id.as_str(), n.id.as_str()),
                "cycle through {}",
                n.id
            );
        }
    }

    #[test]
    fn test_before_sibling_moves_to_front() {
        // Scenario: three roots, drag the last one before the first.
        let list = vec![note("a", None), note("b", None), note("c", None)];
        let out = reorder(&list, "c", "a", DropIntent::BeforeSibling);
        assert_eq!(ids(&out), vec!["c", "a", "b"]);
        assert!(out.iter().all(|n| n.parent_id.is_none()));
        assert_valid(&out);
    }

    #[test]
    fn test_become_child_reparents() {
        let list = vec![note("a", None), note("b", None)];
        let out = reorder(&list, "b", "a", DropIntent::BecomeChild);
        assert_eq!(ids(&out), vec!["a", "b"]);
        assert_eq!(parent_of(&out, "b"), Some("a"));
        assert_valid(&out);
    }

    #[test]
    fn test_subtree_travels_with_dragged_note() {
        // b is a child of a; moving a after c must carry b along, with b's
        // parent link untouched.
        let list = vec![note("a", None), note("b", Some("a")), note("c", None)];
        let out = reorder(&list, "a", "c", DropIntent::AfterSibling);
        assert_eq!(ids(&out), vec!["c", "a", "b"]);
        assert_eq!(parent_of(&out, "b"), Some("a"));
        assert!(parent_of(&out, "a").is_none());
        assert_valid(&out);
    }

    #[test]
    fn test_drop_into_own_child_is_rejected() {
        let list = vec![note("a", None), note("b", Some("a"))];
        let out = reorder(&list, "a", "b", DropIntent::BecomeChild);
        assert_eq!(out, list);
    }

    #[test]
    fn test_drop_into_deep_descendant_is_rejected() {
        let list = vec![note("a", None), note("b", Some("a")), note("c", Some("b"))];
        for intent in [
            DropIntent::BeforeSibling,
            DropIntent::AfterSibling,
            DropIntent::BecomeChild,
        ] {
            assert_eq!(reorder(&list, "a", "c", intent), list);
        }
    }

    #[test]
    fn test_self_drop_is_noop() {
        let list = vec![note("a", None), note("b", None)];
        for intent in [
            DropIntent::BeforeSibling,
            DropIntent::AfterSibling,
            DropIntent::BecomeChild,
        ] {
            assert_eq!(reorder(&list, "a", "a", intent), list);
        }
    }

    #[test]
    fn test_unknown_ids_are_noop() {
        let list = vec![note("a", None), note("b", None)];
        assert_eq!(
            reorder(&list, "missing", "a", DropIntent::BecomeChild),
            list
        );
        assert_eq!(
            reorder(&list, "a", "missing", DropIntent::AfterSibling),
            list
        );
    }

    #[test]
    fn test_become_child_appends_as_last_child() {
        // a already has children b and c; dropping d into a lands after c.
        let list = vec![
            note("a", None),
            note("b", Some("a")),
            note("c", Some("a")),
            note("d", None),
        ];
        let out = reorder(&list, "d", "a", DropIntent::BecomeChild);
        assert_eq!(ids(&out), vec!["a", "b", "c", "d"]);
        let child_ids: Vec<&str> = children(&out, "a").iter().map(|n| n.id.as_str()).collect();
        assert_eq!(child_ids, vec!["b", "c", "d"]);
        assert_valid(&out);
    }

    #[test]
    fn test_sibling_insert_inherits_target_parent() {
        // Dropping a root note between two children of p nests it under p.
        let list = vec![
            note("p", None),
            note("x", Some("p")),
            note("y", Some("p")),
            note("q", None),
        ];
        let out = reorder(&list, "q", "y", DropIntent::BeforeSibling);
        assert_eq!(ids(&out), vec!["p", "x", "q", "y"]);
        assert_eq!(parent_of(&out, "q"), Some("p"));
        let child_ids: Vec<&str> = children(&out, "p").iter().map(|n| n.id.as_str()).collect();
        assert_eq!(child_ids, vec!["x", "q", "y"]);
        assert_valid(&out);
    }

    #[test]
    fn test_subtree_cohesion_and_relative_order() {
        // a with descendants a1, a2 (in that order) stays contiguous and
        // ordered wherever it lands.
        let list = vec![
            note("a", None),
            note("a1", Some("a")),
            note("a2", Some("a")),
            note("b", None),
            note("c", None),
        ];
        let out = reorder(&list, "a", "c", DropIntent::AfterSibling);
        assert_eq!(ids(&out), vec!["b", "c", "a", "a1", "a2"]);
        assert_eq!(parent_of(&out, "a1"), Some("a"));
        assert_eq!(parent_of(&out, "a2"), Some("a"));
        assert_valid(&out);
    }

    #[test]
    fn test_moving_nested_subtree_out_to_root() {
        let list = vec![
            note("a", None),
            note("b", Some("a")),
            note("c", Some("b")),
            note("d", None),
        ];
        let out = reorder(&list, "b", "d", DropIntent::AfterSibling);
        assert_eq!(ids(&out), vec!["a", "d", "b", "c"]);
        assert!(parent_of(&out, "b").is_none(), "b becomes a root");
        assert_eq!(parent_of(&out, "c"), Some("b"), "c stays under b");
        assert_valid(&out);
        assert_eq!(roots(&out).len(), 3);
    }

    #[test]
    fn test_reorder_within_same_parent() {
        let list = vec![
            note("p", None),
            note("x", Some("p")),
            note("y", Some("p")),
            note("z", Some("p")),
        ];
        let out = reorder(&list, "z", "x", DropIntent::BeforeSibling);
        let child_ids: Vec<&str> = children(&out, "p").iter().map(|n| n.id.as_str()).collect();
        assert_eq!(child_ids, vec!["z", "x", "y"]);
        assert_valid(&out);
    }

    #[test]
    fn test_input_list_is_untouched() {
        let list = vec![note("a", None), note("b", None)];
        let snapshot = list.clone();
        let _ = reorder(&list, "b", "a", DropIntent::BecomeChild);
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_titles_and_content_pass_through() {
        let mut list = vec![note("a", None), note("b", None)];
        list[1].title = "Groceries".to_string();
        list[1].content = r#"[{"type":"paragraph","content":["milk"]}]"#.to_string();
        let out = reorder(&list, "b", "a", DropIntent::BecomeChild);
        let b = out.iter().find(|n| n.id == "b").unwrap();
        assert_eq!(b.title, "Groceries");
        assert_eq!(b.content, r#"[{"type":"paragraph","content":["milk"]}]"#);
    }
}

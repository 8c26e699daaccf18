//! High-level workspace operations over a Nestnote JSON notes file.

use crate::core::{reorder, tree};
use crate::{
    DeleteResult, DeleteStrategy, DragSession, DropIntent, DropTarget, NestnoteError, Note,
    Result, RowRect, Storage, TreeNode,
};
use std::path::{Path, PathBuf};

/// An open Nestnote workspace backed by a JSON notes file.
///
/// `Workspace` owns the authoritative flat note list. Every mutation computes
/// a full replacement list, assigns it, and persists it — the list is never
/// edited in place, and during a drag gesture it is treated as an immutable
/// snapshot until the single commit on drop.
pub struct Workspace {
    path: PathBuf,
    notes: Vec<Note>,
    drag: Option<DragSession>,
}

impl Workspace {
    /// Creates a new notes file at `path`, seeded with one root note named
    /// after the file (e.g. `"My Notes"` for `my-notes.json`).
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::Io`] if the file cannot be written.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let filename = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled");
        let mut root = Note::new(None);
        root.title = humanize(filename);

        let notes = vec![root];
        Storage::save(&path, &notes)?;
        log::info!("created workspace at {}", path.display());

        Ok(Self {
            path,
            notes,
            drag: None,
        })
    }

    /// Opens an existing notes file. A missing file opens as an empty
    /// workspace rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::Io`], [`NestnoteError::Json`] or
    /// [`NestnoteError::InvalidStore`] if the file exists but cannot be read
    /// as a notes file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let notes = Storage::load(&path)?;
        log::info!("opened workspace at {} ({} notes)", path.display(), notes.len());

        Ok(Self {
            path,
            notes,
            drag: None,
        })
    }

    /// The authoritative note list, in render order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The nested forest projection of the list, for the sidebar.
    #[must_use]
    pub fn tree(&self) -> Vec<TreeNode> {
        tree::project(&self.notes)
    }

    /// Looks up a note by id.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::NoteNotFound`] if `note_id` is not in the list.
    pub fn get_note(&self, note_id: &str) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == note_id)
            .ok_or_else(|| NestnoteError::NoteNotFound(note_id.to_string()))
    }

    /// Creates a new untitled note and prepends it to the front of the list,
    /// so it renders as the first sibling under its parent. Returns the new
    /// note's id.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::NoteNotFound`] if `parent_id` is given but
    /// does not exist, or a persistence error from the save.
    pub fn create_note(&mut self, parent_id: Option<&str>) -> Result<String> {
        if let Some(pid) = parent_id {
            self.get_note(pid)?;
        }

        let note = Note::new(parent_id.map(str::to_string));
        let id = note.id.clone();
        self.notes.insert(0, note);
        self.save()?;
        log::debug!("created note {id}");
        Ok(id)
    }

    /// Renames a note.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::NoteNotFound`] if `note_id` does not exist,
    /// or a persistence error from the save.
    pub fn update_note_title(&mut self, note_id: &str, new_title: String) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| NestnoteError::NoteNotFound(note_id.to_string()))?;
        note.title = new_title;
        self.save()
    }

    /// Replaces a note's serialized editor content. The blob is stored
    /// unchanged; the core never looks inside it.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::NoteNotFound`] if `note_id` does not exist,
    /// or a persistence error from the save.
    pub fn update_note_content(&mut self, note_id: &str, new_content: String) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or_else(|| NestnoteError::NoteNotFound(note_id.to_string()))?;
        note.content = new_content;
        self.save()
    }

    /// Deletes a note according to `strategy`.
    ///
    /// [`DeleteStrategy::DeleteAll`] removes the whole subtree;
    /// [`DeleteStrategy::PromoteChildren`] removes only the note and
    /// re-parents its direct children to the note's former parent, keeping
    /// their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`NestnoteError::NoteNotFound`] if `note_id` does not exist,
    /// or a persistence error from the save.
    pub fn delete_note(&mut self, note_id: &str, strategy: DeleteStrategy) -> Result<DeleteResult> {
        let target = self.get_note(note_id)?.clone();

        let result = match strategy {
            DeleteStrategy::DeleteAll => {
                let mut doomed = tree::descendants(&self.notes, note_id);
                doomed.insert(note_id.to_string());

                let mut affected: Vec<String> = Vec::with_capacity(doomed.len());
                self.notes.retain(|n| {
                    if doomed.contains(&n.id) {
                        affected.push(n.id.clone());
                        false
                    } else {
                        true
                    }
                });

                DeleteResult {
                    deleted_count: affected.len(),
                    affected_ids: affected,
                }
            }
            DeleteStrategy::PromoteChildren => {
                let mut affected = vec![note_id.to_string()];
                for note in self
                    .notes
                    .iter_mut()
                    .filter(|n| n.parent_id.as_deref() == Some(note_id))
                {
                    note.parent_id = target.parent_id.clone();
                    affected.push(note.id.clone());
                }
                self.notes.retain(|n| n.id != note_id);

                DeleteResult {
                    deleted_count: 1,
                    affected_ids: affected,
                }
            }
        };

        self.save()?;
        log::debug!(
            "deleted note {note_id} ({} removed, {} affected)",
            result.deleted_count,
            result.affected_ids.len()
        );
        Ok(result)
    }

    /// Starts a drag gesture for `note_id`.
    ///
    /// Returns `false` without starting when a gesture is already active or
    /// the id is unknown — at most one drag can be in flight, and the list
    /// stays an untouched snapshot until the gesture completes.
    pub fn start_drag(&mut self, note_id: &str) -> bool {
        if self.drag.is_some() || self.get_note(note_id).is_err() {
            return false;
        }
        self.drag = Some(DragSession::new(note_id));
        true
    }

    /// Re-classifies the active drag against the row under the pointer and
    /// returns the refreshed drop indicator. `None` when no drag is active
    /// or the pointer is not over a valid target.
    pub fn drag_over(
        &mut self,
        rect: RowRect,
        pointer_y: f64,
        candidate_id: &str,
    ) -> Option<&DropTarget> {
        self.drag
            .as_mut()
            .and_then(|session| session.update(rect, pointer_y, candidate_id))
    }

    /// Abandons the active drag gesture, if any. Always safe: no mutation
    /// happens before [`complete_drag`](Self::complete_drag), so there is
    /// nothing to roll back.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Commits the active drag gesture. Returns `true` when the list
    /// actually changed; an invalid or missing drop target ends the gesture
    /// as a no-op.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the changed list cannot be saved.
    pub fn complete_drag(&mut self) -> Result<bool> {
        let Some((dragged_id, target)) = self.drag.take().and_then(DragSession::finish) else {
            return Ok(false);
        };
        self.reorder_note(&dragged_id, &target.target_id, target.intent)
    }

    /// Applies a classified drop directly, outside the gesture flow.
    ///
    /// Invalid moves (self-drop, cycle, unknown id) leave the list unchanged
    /// and return `Ok(false)`; they are expected outcomes of a drag, not
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the changed list cannot be saved.
    pub fn reorder_note(
        &mut self,
        dragged_id: &str,
        target_id: &str,
        intent: DropIntent,
    ) -> Result<bool> {
        let updated = reorder::reorder(&self.notes, dragged_id, target_id, intent);
        if updated == self.notes {
            log::debug!("reorder of {dragged_id} onto {target_id} rejected or unchanged");
            return Ok(false);
        }

        self.notes = updated;
        self.save()?;
        log::debug!("moved note {dragged_id} {intent:?} {target_id}");
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        Storage::save(&self.path, &self.notes)
    }
}

/// Converts a file stem like `my-notes` or `hello_world` into a title like
/// `My Notes`.
fn humanize(stem: &str) -> String {
    stem.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

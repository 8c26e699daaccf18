//! Drag geometry classification and drag-gesture state.
//!
//! The rendering layer supplies one bounding box and one pointer coordinate
//! per candidate row on every pointer-move; nothing here touches the DOM or
//! the note list. Classification runs at pointer-move frequency, so it is a
//! constant-time pure function.

use serde::{Deserialize, Serialize};

/// Fraction of a row's height forming the "insert before" zone at its top.
const BEFORE_ZONE: f64 = 0.25;
/// Fraction of a row's height above which the "insert after" zone begins.
const AFTER_ZONE: f64 = 0.75;

/// The classified meaning of a drop position relative to the target row.
///
/// Serialized as a PascalCase string (`"BeforeSibling"`, `"AfterSibling"`,
/// `"BecomeChild"`) so the front-end can use the values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum DropIntent {
    /// Insert as a sibling immediately before the target note.
    BeforeSibling,
    /// Insert as a sibling immediately after the target note.
    AfterSibling,
    /// Reparent under the target note, as its last child.
    BecomeChild,
}

/// The vertical extent of a candidate row, as reported by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRect {
    pub top: f64,
    pub height: f64,
}

/// A classified drop: which note the pointer is over and what releasing
/// there would mean. Drives the live drop indicator while dragging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub target_id: String,
    pub intent: DropIntent,
}

/// Maps a pointer position over a candidate row to a drop intent.
///
/// The row height is split into three zones: the top quartile means "insert
/// before", the bottom quartile "insert after", and the middle half "nest
/// inside" — the usual outliner convention, which keeps sibling insertion
/// reachable at the row edges and nesting reachable across the row body.
///
/// Returns `None` when the candidate row is the dragged note itself; a
/// self-drop is never a valid target.
#[must_use]
pub fn classify_drop(
    rect: RowRect,
    pointer_y: f64,
    dragged_id: &str,
    candidate_id: &str,
) -> Option<DropTarget> {
    if dragged_id == candidate_id {
        return None;
    }

    let relative_y = pointer_y - rect.top;
    let intent = if relative_y < BEFORE_ZONE * rect.height {
        DropIntent::BeforeSibling
    } else if relative_y > AFTER_ZONE * rect.height {
        DropIntent::AfterSibling
    } else {
        DropIntent::BecomeChild
    };

    Some(DropTarget {
        target_id: candidate_id.to_string(),
        intent,
    })
}

/// Transient state for one in-flight drag gesture.
///
/// A session is created on pointer-down, refreshed on every pointer-move via
/// [`update`](Self::update), and consumed exactly once on pointer-up via
/// [`finish`](Self::finish). Cancelling is just dropping the session: no
/// mutation has happened yet, so there is nothing to roll back. The session
/// only tracks classification state — the note list is never touched until
/// the owner applies the finished drop through [`crate::reorder`].
#[derive(Debug)]
pub struct DragSession {
    dragged_id: String,
    indicator: Option<DropTarget>,
}

impl DragSession {
    /// Starts a drag gesture for `dragged_id`.
    #[must_use]
    pub fn new(dragged_id: impl Into<String>) -> Self {
        Self {
            dragged_id: dragged_id.into(),
            indicator: None,
        }
    }

    /// The id of the note being dragged.
    #[must_use]
    pub fn dragged_id(&self) -> &str {
        &self.dragged_id
    }

    /// Re-classifies against the row currently under the pointer and returns
    /// the refreshed drop indicator. Hovering the dragged note's own row
    /// clears the indicator.
    pub fn update(
        &mut self,
        rect: RowRect,
        pointer_y: f64,
        candidate_id: &str,
    ) -> Option<&DropTarget> {
        self.indicator = classify_drop(rect, pointer_y, &self.dragged_id, candidate_id);
        self.indicator.as_ref()
    }

    /// The current drop indicator, if the pointer is over a valid target.
    #[must_use]
    pub fn indicator(&self) -> Option<&DropTarget> {
        self.indicator.as_ref()
    }

    /// Ends the gesture, yielding the dragged id and the final drop target.
    ///
    /// Returns `None` when the pointer was not over a valid target at
    /// release, in which case the drag is a no-op.
    #[must_use]
    pub fn finish(self) -> Option<(String, DropTarget)> {
        let target = self.indicator?;
        Some((self.dragged_id, target))
    }
}

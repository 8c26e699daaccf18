//! Internal domain modules for the Nestnote core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod delete;
pub mod drag;
pub mod error;
pub mod note;
pub mod reorder;
pub mod storage;
pub mod tree;
pub mod workspace;

#[doc(inline)]
pub use delete::{DeleteResult, DeleteStrategy};
#[doc(inline)]
pub use drag::{classify_drop, DragSession, DropIntent, DropTarget, RowRect};
#[doc(inline)]
pub use error::{NestnoteError, Result};
#[doc(inline)]
pub use note::Note;
#[doc(inline)]
pub use reorder::reorder;
#[doc(inline)]
pub use storage::Storage;
#[doc(inline)]
pub use tree::{children, descendants, is_descendant, project, roots, TreeNode};
#[doc(inline)]
pub use workspace::Workspace;

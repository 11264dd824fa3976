//! # Sitecraft Editor
//!
//! Editing engine for block pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ ProjectStore: payload JSON ⇄ Document       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ EditSession: one tab's editing state        │
//! │  - Mutations with inverses (undo/redo)      │
//! │  - Selection, edit/preview toggle           │
//! │  - Version counter, dirty flag              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: Document → canvas / panel / HTML  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: canvas, panel and HTML are derived views
//! 2. **Pure edits**: mutations produce a new document; failures change nothing
//! 3. **Field-granular writes**: last write wins per field, no merging
//! 4. **Explicit saves**: a failed save is reported, never retried
//!
//! ## Usage
//!
//! ```rust
//! use sitecraft_editor::{EditSession, MemoryStore, ProjectStore};
//! use sitecraft_schema::BlockKind;
//! # fn main() -> Result<(), sitecraft_editor::EditorError> {
//! let store = MemoryStore::new();
//! let mut session = EditSession::new("landing", Default::default());
//!
//! let hero = session.add_block(BlockKind::Hero, None)?;
//! let panel = session.panel().expect("new block is selected");
//! session.edit_field(panel.edit_text("title", "Hello!"))?;
//!
//! session.undo()?;
//! session.save(&store)?;
//! assert_eq!(store.load("landing")?.ids(), vec![&hero]);
//! # Ok(())
//! # }
//! ```

mod errors;
mod mutations;
mod session;
mod storage;
mod undo_stack;

pub use errors::{EditorError, StorageError};
pub use mutations::Mutation;
pub use session::EditSession;
pub use storage::{validate_project_id, MemoryStore, ProjectStore};
#[cfg(feature = "fs")]
pub use storage::FileStore;
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export common types for convenience
pub use sitecraft_document::{Document, DocumentError};

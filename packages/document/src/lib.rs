//! # Sitecraft Document
//!
//! The ordered list of blocks that forms one page.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: block kinds, fields, defaults       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered blocks + pure operations  │
//! │  - insert / reorder / remove                │
//! │  - field-granular content updates           │
//! │  - visibility                               │
//! │  - JSON payload load/save                   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: edit / preview / public output    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every operation takes `&self` and returns a new [`Document`]. The caller's
//! value is never touched, which keeps undo/redo and change detection a
//! matter of comparing values.
//!
//! ```rust
//! use sitecraft_document::Document;
//! use sitecraft_schema::{create_block, BlockKind};
//!
//! let hero = create_block(BlockKind::Hero);
//! let id = hero.id.clone();
//!
//! let doc = Document::new().insert(hero, None)?;
//! let doc = doc.update_content(&id, "title", "Welcome".into())?;
//! assert_eq!(doc.get(&id).unwrap().field("title").unwrap(), "Welcome");
//! # Ok::<(), sitecraft_document::DocumentError>(())
//! ```

mod document;
mod errors;
mod payload;

pub use document::Document;
pub use errors::DocumentError;

pub use sitecraft_schema::{Block, BlockId, BlockKind, ContentMap};

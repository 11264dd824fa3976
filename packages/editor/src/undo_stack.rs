//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each mutation records its inverse before being applied
//! - Undo applies the inverses and moves the batch to the redo stack
//! - Redo reapplies the original mutations
//! - New mutations clear the redo stack
//! - Supports batched operations (group multiple mutations as one undo step)
//!
//! Documents are immutable values, so every call takes the current document
//! and returns the next one. A batch that fails half way through leaves both
//! the stacks and the caller's document untouched.
//!
//! ## Example
//!
//! ```rust
//! use sitecraft_document::Document;
//! use sitecraft_editor::{Mutation, UndoStack};
//! use sitecraft_schema::{create_block, BlockKind};
//!
//! let mut stack = UndoStack::new();
//! let doc = Document::new();
//!
//! let insert = Mutation::InsertBlock { block: create_block(BlockKind::Hero), index: None };
//! let doc = stack.apply(&insert, &doc).unwrap();
//! assert_eq!(doc.len(), 1);
//!
//! let doc = stack.undo(&doc).unwrap().unwrap();
//! assert!(doc.is_empty());
//!
//! let doc = stack.redo(&doc).unwrap().unwrap();
//! assert_eq!(doc.len(), 1);
//! ```

use crate::Mutation;
use sitecraft_document::{Document, DocumentError};
use tracing::debug;

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone, PartialEq)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// The inverse mutations (in reverse order for undo)
    pub inverses: Vec<Mutation>,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    /// Create a single-mutation batch
    pub fn single(mutation: Mutation, inverse: Mutation) -> Self {
        Self {
            description: Some(mutation.describe()),
            mutations: vec![mutation],
            inverses: vec![inverse],
        }
    }

    fn empty() -> Self {
        Self {
            mutations: Vec::new(),
            inverses: Vec::new(),
            description: None,
        }
    }
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied mutations (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Stack of undone mutations (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    pub fn apply(&mut self, mutation: &Mutation, doc: &Document) -> Result<Document, DocumentError> {
        // Generate inverse before applying
        let inverse = mutation.to_inverse(doc)?;
        let next = mutation.apply(doc)?;

        if let Some(batch) = &mut self.current_batch {
            batch.mutations.push(mutation.clone());
            batch.inverses.insert(0, inverse); // Inverses go in reverse order
        } else {
            self.push_batch(MutationBatch::single(mutation.clone(), inverse));
        }

        Ok(next)
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(MutationBatch::empty());
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(mut batch) = self.current_batch.take() {
            if batch.mutations.is_empty() {
                return;
            }
            if batch.description.is_none() && batch.mutations.len() == 1 {
                batch.description = Some(batch.mutations[0].describe());
            }
            self.push_batch(batch);
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Push a batch to the undo stack
    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack (new action invalidates future)
        self.redo_stack.clear();
    }

    /// Undo the most recent batch. `None` when there is nothing to undo.
    pub fn undo(&mut self, doc: &Document) -> Result<Option<Document>, DocumentError> {
        let Some(batch) = self.undo_stack.pop() else {
            return Ok(None);
        };

        match replay(&batch.inverses, doc) {
            Ok(next) => {
                debug!(description = ?batch.description, "Undo");
                self.redo_stack.push(batch);
                Ok(Some(next))
            }
            Err(err) => {
                self.undo_stack.push(batch);
                Err(err)
            }
        }
    }

    /// Redo the most recently undone batch. `None` when there is nothing to redo.
    pub fn redo(&mut self, doc: &Document) -> Result<Option<Document>, DocumentError> {
        let Some(batch) = self.redo_stack.pop() else {
            return Ok(None);
        };

        match replay(&batch.mutations, doc) {
            Ok(next) => {
                debug!(description = ?batch.description, "Redo");
                self.undo_stack.push(batch);
                Ok(Some(next))
            }
            Err(err) => {
                self.redo_stack.push(batch);
                Err(err)
            }
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

fn replay(mutations: &[Mutation], doc: &Document) -> Result<Document, DocumentError> {
    mutations
        .iter()
        .try_fold(doc.clone(), |doc, mutation| mutation.apply(&doc))
}

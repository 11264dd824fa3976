//! # Document
//!
//! An ordered sequence of blocks. Order is render order (top to bottom) and
//! is the unit of drag-reorder. Block ids are unique within a document.
//!
//! ## Operation semantics
//!
//! ### insert
//! - Appends when no index is given
//! - An explicit index shifts later blocks down; past the end appends
//! - Fails on a duplicate id
//!
//! ### reorder
//! - Moves one block; all others keep their relative order
//! - Both indices must address an existing block
//!
//! ### remove
//! - Idempotent: removing an unknown id returns an equal document
//!
//! All other operations fail fast on an unknown block id.

use crate::DocumentError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitecraft_schema::{Block, BlockId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from blocks, rejecting duplicate ids
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, DocumentError> {
        blocks
            .into_iter()
            .try_fold(Self::new(), |doc, block| doc.insert(block, None))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn ids(&self) -> Vec<&BlockId> {
        self.blocks.iter().map(|b| &b.id).collect()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    /// Insert a block, appending when `at` is `None`
    pub fn insert(&self, block: Block, at: Option<usize>) -> Result<Self, DocumentError> {
        if self.contains(&block.id) {
            return Err(DocumentError::DuplicateBlockId(block.id));
        }

        let mut blocks = self.blocks.clone();
        let index = at.unwrap_or(blocks.len()).min(blocks.len());
        blocks.insert(index, block);
        Ok(Self { blocks })
    }

    /// Move the block at `from` so it ends up at `to`
    pub fn reorder(&self, from: usize, to: usize) -> Result<Self, DocumentError> {
        let len = self.blocks.len();
        for index in [from, to] {
            if index >= len {
                return Err(DocumentError::IndexOutOfRange { index, len });
            }
        }

        let mut blocks = self.blocks.clone();
        let block = blocks.remove(from);
        blocks.insert(to, block);
        Ok(Self { blocks })
    }

    /// Replace one field of one block's content.
    ///
    /// Fields outside the kind's schema are stored as given; flagging them is
    /// the linter's job.
    pub fn update_content(
        &self,
        id: &BlockId,
        field: &str,
        value: Value,
    ) -> Result<Self, DocumentError> {
        self.map_block(id, |block| {
            block.content.insert(field.to_string(), value);
        })
    }

    /// Drop one field so the kind's default applies again
    pub fn reset_field(&self, id: &BlockId, field: &str) -> Result<Self, DocumentError> {
        self.map_block(id, |block| {
            block.content.remove(field);
        })
    }

    pub fn set_visible(&self, id: &BlockId, visible: bool) -> Result<Self, DocumentError> {
        self.map_block(id, |block| block.visible = visible)
    }

    pub fn rename(&self, id: &BlockId, name: &str) -> Result<Self, DocumentError> {
        self.map_block(id, |block| block.name = name.to_string())
    }

    /// Remove a block. Unknown ids are a no-op so deleting twice is safe.
    pub fn remove(&self, id: &BlockId) -> Self {
        Self {
            blocks: self
                .blocks
                .iter()
                .filter(|b| &b.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Visible blocks in document order
    pub fn list_visible(&self) -> Vec<&Block> {
        self.blocks.iter().filter(|b| b.visible).collect()
    }

    fn map_block(
        &self,
        id: &BlockId,
        f: impl FnOnce(&mut Block),
    ) -> Result<Self, DocumentError> {
        let index = self
            .position(id)
            .ok_or_else(|| DocumentError::BlockNotFound(id.clone()))?;

        let mut blocks = self.blocks.clone();
        f(&mut blocks[index]);
        Ok(Self { blocks })
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

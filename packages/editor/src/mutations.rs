//! # Document Mutations
//!
//! Serializable edit intents. The editor records each one with its inverse so
//! history can be replayed in both directions.
//!
//! ## Mutation Semantics
//!
//! ### InsertBlock
//! - Appends when `index` is absent, clamps past the end
//! - Fails on a duplicate id
//!
//! ### MoveBlock
//! - Both indices must be in range
//!
//! ### UpdateContent / ResetField
//! - Field-granular, last write wins
//! - Undoing the first edit of a field resets it, so the default shows again
//!
//! ### RemoveBlock
//! - Idempotent; removing an unknown id is a no-op

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitecraft_document::{Document, DocumentError};
use sitecraft_renderer::CanvasAction;
use sitecraft_schema::{Block, BlockId};

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mutation {
    /// Insert a block, appending when `index` is absent
    InsertBlock {
        block: Block,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Move the block at `from` to `to`
    MoveBlock { from: usize, to: usize },

    /// Replace one content field
    UpdateContent {
        block_id: BlockId,
        field: String,
        value: Value,
    },

    /// Drop one content field so its default applies
    ResetField { block_id: BlockId, field: String },

    SetVisible { block_id: BlockId, visible: bool },

    RenameBlock { block_id: BlockId, name: String },

    RemoveBlock { block_id: BlockId },
}

impl Mutation {
    /// Apply to a document, returning the edited copy
    pub fn apply(&self, doc: &Document) -> Result<Document, DocumentError> {
        match self {
            Mutation::InsertBlock { block, index } => doc.insert(block.clone(), *index),
            Mutation::MoveBlock { from, to } => doc.reorder(*from, *to),
            Mutation::UpdateContent {
                block_id,
                field,
                value,
            } => doc.update_content(block_id, field, value.clone()),
            Mutation::ResetField { block_id, field } => doc.reset_field(block_id, field),
            Mutation::SetVisible { block_id, visible } => doc.set_visible(block_id, *visible),
            Mutation::RenameBlock { block_id, name } => doc.rename(block_id, name),
            Mutation::RemoveBlock { block_id } => Ok(doc.remove(block_id)),
        }
    }

    /// Mutation that undoes this one, computed against the document it is
    /// about to be applied to.
    ///
    /// Fails with the same error `apply` would, so a mutation that cannot be
    /// applied is never recorded.
    pub fn to_inverse(&self, doc: &Document) -> Result<Mutation, DocumentError> {
        match self {
            Mutation::InsertBlock { block, .. } => {
                if doc.contains(&block.id) {
                    return Err(DocumentError::DuplicateBlockId(block.id.clone()));
                }
                Ok(Mutation::RemoveBlock {
                    block_id: block.id.clone(),
                })
            }

            Mutation::MoveBlock { from, to } => {
                let len = doc.len();
                for index in [*from, *to] {
                    if index >= len {
                        return Err(DocumentError::IndexOutOfRange { index, len });
                    }
                }
                Ok(Mutation::MoveBlock {
                    from: *to,
                    to: *from,
                })
            }

            Mutation::UpdateContent {
                block_id, field, ..
            }
            | Mutation::ResetField { block_id, field } => {
                let block = find(doc, block_id)?;
                Ok(match block.content.get(field) {
                    Some(previous) => Mutation::UpdateContent {
                        block_id: block_id.clone(),
                        field: field.clone(),
                        value: previous.clone(),
                    },
                    None => Mutation::ResetField {
                        block_id: block_id.clone(),
                        field: field.clone(),
                    },
                })
            }

            Mutation::SetVisible { block_id, .. } => {
                let block = find(doc, block_id)?;
                Ok(Mutation::SetVisible {
                    block_id: block_id.clone(),
                    visible: block.visible,
                })
            }

            Mutation::RenameBlock { block_id, .. } => {
                let block = find(doc, block_id)?;
                Ok(Mutation::RenameBlock {
                    block_id: block_id.clone(),
                    name: block.name.clone(),
                })
            }

            Mutation::RemoveBlock { block_id } => match doc.position(block_id) {
                Some(index) => Ok(Mutation::InsertBlock {
                    block: doc.blocks[index].clone(),
                    index: Some(index),
                }),
                // Removing nothing is undone by removing nothing
                None => Ok(self.clone()),
            },
        }
    }

    /// Mutation equivalent of a canvas toolbar action.
    ///
    /// `None` when the action would not change the document, such as moving
    /// the first block up.
    pub fn from_canvas(action: &CanvasAction, doc: &Document) -> Result<Option<Mutation>, DocumentError> {
        let block_id = action.block_id();
        let from = doc
            .position(block_id)
            .ok_or_else(|| DocumentError::BlockNotFound(block_id.clone()));

        Ok(match action {
            CanvasAction::MoveUp { .. } => {
                let from = from?;
                from.checked_sub(1).map(|to| Mutation::MoveBlock { from, to })
            }
            CanvasAction::MoveDown { .. } => {
                let from = from?;
                (from + 1 < doc.len()).then(|| Mutation::MoveBlock { from, to: from + 1 })
            }
            CanvasAction::ToggleVisibility { .. } => {
                let block = &doc.blocks[from?];
                Some(Mutation::SetVisible {
                    block_id: block.id.clone(),
                    visible: !block.visible,
                })
            }
            CanvasAction::Delete { .. } => doc.contains(block_id).then(|| Mutation::RemoveBlock {
                block_id: block_id.clone(),
            }),
        })
    }

    /// Block this mutation targets, if it targets one by id
    pub fn block_id(&self) -> Option<&BlockId> {
        match self {
            Mutation::InsertBlock { block, .. } => Some(&block.id),
            Mutation::MoveBlock { .. } => None,
            Mutation::UpdateContent { block_id, .. }
            | Mutation::ResetField { block_id, .. }
            | Mutation::SetVisible { block_id, .. }
            | Mutation::RenameBlock { block_id, .. }
            | Mutation::RemoveBlock { block_id } => Some(block_id),
        }
    }

    /// Short label for history menus ("Undo Edit title")
    pub fn describe(&self) -> String {
        match self {
            Mutation::InsertBlock { block, .. } => format!("Add {}", block.display_name()),
            Mutation::MoveBlock { .. } => "Move block".to_string(),
            Mutation::UpdateContent { field, .. } => format!("Edit {}", field),
            Mutation::ResetField { field, .. } => format!("Reset {}", field),
            Mutation::SetVisible { visible: true, .. } => "Show block".to_string(),
            Mutation::SetVisible { visible: false, .. } => "Hide block".to_string(),
            Mutation::RenameBlock { .. } => "Rename block".to_string(),
            Mutation::RemoveBlock { .. } => "Delete block".to_string(),
        }
    }
}

fn find<'a>(doc: &'a Document, id: &BlockId) -> Result<&'a Block, DocumentError> {
    doc.get(id)
        .ok_or_else(|| DocumentError::BlockNotFound(id.clone()))
}

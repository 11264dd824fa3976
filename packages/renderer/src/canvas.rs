//! Editor canvas interactions.
//!
//! The canvas emits `data-block-id` and `data-action` attributes (see
//! [`render`](crate::render)); the host turns DOM events into the types here.
//! Drops apply directly; toolbar actions go through the editor's mutations
//! so they land in the undo history.

use serde::{Deserialize, Serialize};
use sitecraft_document::{Document, DocumentError};
use sitecraft_schema::BlockId;

/// Toolbar intent on one framed block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum CanvasAction {
    MoveUp { block_id: BlockId },
    MoveDown { block_id: BlockId },
    ToggleVisibility { block_id: BlockId },
    Delete { block_id: BlockId },
}

impl CanvasAction {
    /// Parse the `data-action` value of a toolbar button
    pub fn from_toolbar(action: &str, block_id: BlockId) -> Option<Self> {
        match action {
            "move-up" => Some(Self::MoveUp { block_id }),
            "move-down" => Some(Self::MoveDown { block_id }),
            "toggle-visibility" => Some(Self::ToggleVisibility { block_id }),
            "delete" => Some(Self::Delete { block_id }),
            _ => None,
        }
    }

    pub fn block_id(&self) -> &BlockId {
        match self {
            Self::MoveUp { block_id }
            | Self::MoveDown { block_id }
            | Self::ToggleVisibility { block_id }
            | Self::Delete { block_id } => block_id,
        }
    }
}

fn locate(doc: &Document, id: &BlockId) -> Result<usize, DocumentError> {
    doc.position(id)
        .ok_or_else(|| DocumentError::BlockNotFound(id.clone()))
}

/// Indices for dropping the dragged block `active` onto block `over`.
///
/// `None` when either id is unknown or both are the same block.
pub fn resolve_drop(doc: &Document, active: &BlockId, over: &BlockId) -> Option<(usize, usize)> {
    let from = doc.position(active)?;
    let to = doc.position(over)?;
    (from != to).then_some((from, to))
}

/// Finish a drag: the dragged block takes the slot of the block it was
/// dropped on.
pub fn apply_drop(doc: &Document, active: &BlockId, over: &BlockId) -> Result<Document, DocumentError> {
    let from = locate(doc, active)?;
    let to = locate(doc, over)?;
    if from == to {
        return Ok(doc.clone());
    }
    doc.reorder(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecraft_schema::{Block, BlockKind};

    fn doc() -> Document {
        Document::from_blocks(vec![
            Block::new("a", BlockKind::Hero),
            Block::new("b", BlockKind::About),
            Block::new("c", BlockKind::Footer),
        ])
        .unwrap()
    }

    fn order(doc: &Document) -> Vec<&str> {
        doc.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_drop_moves_dragged_block() {
        let doc = doc();
        assert_eq!(resolve_drop(&doc, &"a".into(), &"c".into()), Some((0, 2)));
        let moved = apply_drop(&doc, &"a".into(), &"c".into()).unwrap();
        assert_eq!(order(&moved), vec!["b", "c", "a"]);

        let moved = apply_drop(&doc, &"c".into(), &"a".into()).unwrap();
        assert_eq!(order(&moved), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_drop_on_self_or_unknown() {
        let doc = doc();
        assert_eq!(resolve_drop(&doc, &"b".into(), &"b".into()), None);
        assert_eq!(resolve_drop(&doc, &"x".into(), &"b".into()), None);
        assert_eq!(apply_drop(&doc, &"b".into(), &"b".into()).unwrap(), doc);
        assert!(matches!(
            apply_drop(&doc, &"x".into(), &"b".into()),
            Err(DocumentError::BlockNotFound(_))
        ));
    }

    #[test]
    fn test_toolbar_actions_parse() {
        assert_eq!(
            CanvasAction::from_toolbar("move-up", "b".into()),
            Some(CanvasAction::MoveUp { block_id: "b".into() })
        );
        assert_eq!(
            CanvasAction::from_toolbar("toggle-visibility", "b".into()),
            Some(CanvasAction::ToggleVisibility { block_id: "b".into() })
        );
        let delete = CanvasAction::from_toolbar("delete", "c".into()).unwrap();
        assert_eq!(delete.block_id().as_str(), "c");

        assert!(CanvasAction::from_toolbar("explode", "b".into()).is_none());
    }

    #[test]
    fn test_action_wire_shape() {
        let action = CanvasAction::Delete { block_id: "a".into() };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({ "action": "delete", "block_id": "a" }));
    }
}

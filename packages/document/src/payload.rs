//! JSON payload stored in a project's `content` field.
//!
//! ```text
//! { "blocks": [ { "id", "type", "name", "visible", "content" } ] }
//! ```
//!
//! Loading is lenient: stored data written by older or newer editors, or
//! edited by hand, is repaired rather than rejected. Only text that is not
//! JSON at all fails.

use crate::{Document, DocumentError};
use serde_json::{json, Value};
use sitecraft_schema::{Block, BlockId, BlockKind, ContentMap};
use std::collections::HashSet;
use tracing::{debug, warn};

impl Document {
    pub fn to_payload(&self) -> Value {
        json!({ "blocks": self.blocks })
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(&self.to_payload())?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.to_payload())?)
    }

    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        let payload: Value = serde_json::from_str(source)?;
        Ok(Self::from_payload(&payload))
    }

    /// Load a payload, repairing what can be repaired
    pub fn from_payload(payload: &Value) -> Self {
        let entries = match payload.get("blocks") {
            Some(Value::Array(entries)) => entries.as_slice(),
            Some(other) => {
                warn!(found = %type_name(other), "Payload `blocks` is not a list - loading empty document");
                &[]
            }
            None => &[],
        };

        let mut seen = HashSet::new();
        let mut blocks = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let Some(fields) = entry.as_object() else {
                warn!(index, found = %type_name(entry), "Skipping block entry that is not an object");
                continue;
            };

            let mut block = read_block(index, fields);
            if !seen.insert(block.id.clone()) {
                let fresh = BlockId::generate(&block.kind);
                warn!(index, duplicate = %block.id, replacement = %fresh, "Duplicate block id in payload");
                block.id = fresh;
                seen.insert(block.id.clone());
            }
            blocks.push(block);
        }

        debug!(blocks = blocks.len(), "Loaded document payload");
        Self { blocks }
    }
}

fn read_block(index: usize, fields: &ContentMap) -> Block {
    let kind = match fields.get("type") {
        Some(Value::String(tag)) => BlockKind::from_tag(tag),
        _ => {
            warn!(index, "Block entry has no type");
            BlockKind::Other(String::new())
        }
    };

    let id = match fields.get("id") {
        Some(Value::String(id)) if !id.is_empty() => BlockId::new(id.as_str()),
        Some(Value::Number(n)) => BlockId::new(n.to_string()),
        _ => {
            let id = BlockId::generate(&kind);
            warn!(index, generated = %id, "Block entry has no id");
            id
        }
    };

    let name = match fields.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => kind.as_str().to_string(),
    };

    let visible = match fields.get("visible") {
        Some(Value::Bool(visible)) => *visible,
        None => true,
        Some(other) => {
            warn!(index, found = %type_name(other), "Block `visible` is not a boolean - treating as visible");
            true
        }
    };

    let content = match fields.get("content") {
        Some(Value::Object(content)) => content.clone(),
        None | Some(Value::Null) => ContentMap::new(),
        Some(other) => {
            warn!(index, found = %type_name(other), "Block `content` is not an object - dropping it");
            ContentMap::new()
        }
    };

    Block {
        id,
        kind,
        name,
        visible,
        content,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let doc = Document::from_blocks(vec![
            Block::new("hero-1", BlockKind::Hero).with_field("title", "Hi")
        ])
        .unwrap();

        assert_eq!(
            doc.to_payload(),
            json!({
                "blocks": [{
                    "id": "hero-1",
                    "type": "hero",
                    "name": "Hero Section",
                    "visible": true,
                    "content": { "title": "Hi" }
                }]
            })
        );
    }

    #[test]
    fn test_load_round_trips() {
        let doc = Document::from_blocks(vec![
            Block::new("a", BlockKind::Services).with_field("title", "What we do"),
            Block::new("b", BlockKind::from_tag("countdown")).with_visible(false),
        ])
        .unwrap();

        let loaded = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_missing_blocks_is_empty_document() {
        assert!(Document::from_payload(&json!({})).is_empty());
        assert!(Document::from_payload(&json!({ "blocks": "nope" })).is_empty());
    }

    #[test]
    fn test_invalid_json_fails() {
        let err = Document::from_json("{ not json").unwrap_err();
        assert_eq!(err.code(), "invalid_payload");
    }

    #[test]
    fn test_entries_are_repaired() {
        let doc = Document::from_payload(&json!({
            "blocks": [
                "garbage",
                { "type": "hero" },
                { "id": "x", "type": "about", "visible": "yes", "content": [] },
                { "id": "x", "name": "Mystery" },
            ]
        }));

        assert_eq!(doc.len(), 3);

        let hero = &doc.blocks[0];
        assert!(hero.id.as_str().starts_with("hero-"));
        assert_eq!(hero.name, "hero");
        assert!(hero.visible);

        let about = &doc.blocks[1];
        assert_eq!(about.id, "x");
        assert!(about.visible);
        assert!(about.content.is_empty());

        let mystery = &doc.blocks[2];
        assert_ne!(mystery.id, "x");
        assert_eq!(mystery.kind, BlockKind::Other(String::new()));
        assert_eq!(mystery.display_name(), "Mystery");
    }
}

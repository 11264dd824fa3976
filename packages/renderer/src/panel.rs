//! # Property Panel
//!
//! Structured form for the selected block: one control per content field.
//!
//! Edits are field-granular. Every edit produces a [`FieldEdit`] that
//! replaces exactly one top-level field, so two fields edited in quick
//! succession never clobber each other. Editing one item of a repeating
//! group replaces that group's field as a whole.

use crate::sections::safe_url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitecraft_document::{Document, DocumentError};
use sitecraft_schema::{
    default_content, default_item, fields, record_items, scalar_text, Block, BlockId, BlockKind,
    ContentMap, FieldKind, FieldSpec,
};

/// Input widget for one field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "input", rename_all = "kebab-case")]
pub enum Input {
    Text { value: String },
    TextArea { value: String },
    Color { value: String },
    Url { value: String },
    /// Image URL with a preview source (script schemes neutralised)
    Image { value: String, preview: String },
    /// Repeating group, one set of controls per item
    Repeater { items: Vec<Vec<Control>> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub field: String,
    pub label: String,
    #[serde(flatten)]
    pub input: Input,
    /// No usable stored value; the control shows the default
    pub is_default: bool,
}

/// One changed field, ready to apply with `update_content`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEdit {
    pub block_id: BlockId,
    pub field: String,
    pub value: Value,
}

impl FieldEdit {
    pub fn apply(&self, doc: &Document) -> Result<Document, DocumentError> {
        doc.update_content(&self.block_id, &self.field, self.value.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyPanel {
    pub block_id: BlockId,
    pub kind: BlockKind,
    pub title: String,
    pub controls: Vec<Control>,

    #[serde(skip)]
    source: Block,
}

impl PropertyPanel {
    pub fn for_block(block: &Block) -> Self {
        let defaults = default_content(&block.kind);
        let controls = if block.kind.is_known() {
            fields(&block.kind)
                .iter()
                .map(|spec| control(&block.kind, spec, &block.content, &defaults))
                .collect()
        } else {
            // Unknown kinds: expose whatever scalar fields were stored
            block
                .content
                .iter()
                .filter_map(|(name, value)| {
                    scalar_text(Some(value)).map(|text| Control {
                        field: name.clone(),
                        label: name.clone(),
                        input: Input::Text { value: text },
                        is_default: false,
                    })
                })
                .collect()
        };

        Self {
            block_id: block.id.clone(),
            kind: block.kind.clone(),
            title: block.display_name().to_string(),
            controls,
            source: block.clone(),
        }
    }

    pub fn control(&self, field: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.field == field)
    }

    /// Set a scalar field
    pub fn edit_text(&self, field: &str, value: impl Into<String>) -> FieldEdit {
        self.edit(field, Value::String(value.into()))
    }

    /// Set one field of one item in a repeating group.
    ///
    /// `None` if `field` is not a list field of this kind or `index` is past
    /// the end of the group as shown.
    pub fn edit_item(
        &self,
        field: &str,
        index: usize,
        item_field: &str,
        value: impl Into<String>,
    ) -> Option<FieldEdit> {
        let mut items = self.items(field)?;
        let item = items.get_mut(index)?;
        item.insert(item_field.to_string(), Value::String(value.into()));
        Some(self.edit_items(field, items))
    }

    /// Append a default item to a repeating group
    pub fn add_item(&self, field: &str) -> Option<FieldEdit> {
        let mut items = self.items(field)?;
        items.push(default_item(&self.kind, field));
        Some(self.edit_items(field, items))
    }

    /// Remove one item from a repeating group
    pub fn remove_item(&self, field: &str, index: usize) -> Option<FieldEdit> {
        let mut items = self.items(field)?;
        if index >= items.len() {
            return None;
        }
        items.remove(index);
        Some(self.edit_items(field, items))
    }

    /// Items of a list field as the panel shows them (stored, or the default)
    fn items(&self, field: &str) -> Option<Vec<ContentMap>> {
        let spec = fields(&self.kind).iter().find(|spec| spec.name == field)?;
        if !spec.kind.is_list() {
            return None;
        }

        let stored = record_items(self.source.content.get(field));
        if !stored.is_empty() {
            return Some(stored.into_iter().cloned().collect());
        }

        let defaults = default_content(&self.kind);
        Some(record_items(defaults.get(field)).into_iter().cloned().collect())
    }

    fn edit_items(&self, field: &str, items: Vec<ContentMap>) -> FieldEdit {
        self.edit(field, Value::Array(items.into_iter().map(Value::Object).collect()))
    }

    fn edit(&self, field: &str, value: Value) -> FieldEdit {
        FieldEdit {
            block_id: self.block_id.clone(),
            field: field.to_string(),
            value,
        }
    }
}

fn control(kind: &BlockKind, spec: &FieldSpec, stored: &ContentMap, defaults: &ContentMap) -> Control {
    let scalar = |make: fn(String) -> Input| {
        let stored_value = scalar_text(stored.get(spec.name));
        let is_default = stored_value.is_none();
        let value = stored_value
            .or_else(|| scalar_text(defaults.get(spec.name)))
            .unwrap_or_default();
        (make(value), is_default)
    };

    let (input, is_default) = match spec.kind {
        FieldKind::Text => scalar(|value| Input::Text { value }),
        FieldKind::MultilineText => scalar(|value| Input::TextArea { value }),
        FieldKind::Color => scalar(|value| Input::Color { value }),
        FieldKind::Url => scalar(|value| Input::Url { value }),
        FieldKind::ImageUrl => scalar(|value| Input::Image {
            preview: safe_url(&value),
            value,
        }),
        FieldKind::List { item } => {
            let stored_items = record_items(stored.get(spec.name));
            let is_default = stored_items.is_empty();
            let records = if is_default {
                record_items(defaults.get(spec.name))
            } else {
                stored_items
            };

            let item_defaults = default_item(kind, spec.name);
            let items = records
                .into_iter()
                .map(|record| {
                    item.iter()
                        .map(|item_spec| control(kind, item_spec, record, &item_defaults))
                        .collect()
                })
                .collect();

            (Input::Repeater { items }, is_default)
        }
    };

    Control {
        field: spec.name.to_string(),
        label: spec.label.to_string(),
        input,
        is_default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitecraft_schema::create_block;

    #[test]
    fn test_one_control_per_schema_field() {
        let block = create_block(BlockKind::Hero);
        let panel = PropertyPanel::for_block(&block);
        let fields: Vec<_> = panel.controls.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["title", "subtitle", "buttonText", "buttonUrl", "backgroundImage"]
        );
        assert!(matches!(panel.control("subtitle").unwrap().input, Input::TextArea { .. }));
        assert!(matches!(panel.control("buttonUrl").unwrap().input, Input::Url { .. }));
        assert!(matches!(
            panel.control("backgroundImage").unwrap().input,
            Input::Image { .. }
        ));
    }

    #[test]
    fn test_missing_fields_show_defaults() {
        let block = Block::new("h", BlockKind::Hero).with_field("title", "Welcome");
        let panel = PropertyPanel::for_block(&block);

        let title = panel.control("title").unwrap();
        assert_eq!(title.input, Input::Text { value: "Welcome".to_string() });
        assert!(!title.is_default);

        let button = panel.control("buttonText").unwrap();
        assert_eq!(button.input, Input::Text { value: "Get Started".to_string() });
        assert!(button.is_default);
    }

    #[test]
    fn test_color_control() {
        let panel = PropertyPanel::for_block(&create_block(BlockKind::Footer));
        assert_eq!(
            panel.control("backgroundColor").unwrap().input,
            Input::Color { value: "#111827".to_string() }
        );
    }

    #[test]
    fn test_repeater_controls() {
        let panel = PropertyPanel::for_block(&create_block(BlockKind::Services));
        let Input::Repeater { items } = &panel.control("services").unwrap().input else {
            panic!("expected repeater");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0][0].field, "name");
        assert_eq!(items[0][0].input, Input::Text { value: "Web Design".to_string() });
    }

    #[test]
    fn test_edit_text_is_field_granular() {
        let block = create_block(BlockKind::Contact);
        let panel = PropertyPanel::for_block(&block);
        let edit = panel.edit_text("email", "team@example.org");
        assert_eq!(edit.block_id, block.id);
        assert_eq!(edit.field, "email");
        assert_eq!(edit.value, json!("team@example.org"));
    }

    #[test]
    fn test_successive_edits_do_not_clobber() {
        let block = create_block(BlockKind::Hero);
        let id = block.id.clone();
        let doc = Document::new().insert(block, None).unwrap();

        // Both edits built from the same (stale) panel
        let panel = PropertyPanel::for_block(doc.get(&id).unwrap());
        let first = panel.edit_text("title", "Hello");
        let second = panel.edit_text("subtitle", "World");

        let doc = second.apply(&first.apply(&doc).unwrap()).unwrap();
        let block = doc.get(&id).unwrap();
        assert_eq!(block.field("title"), Some(&json!("Hello")));
        assert_eq!(block.field("subtitle"), Some(&json!("World")));
    }

    #[test]
    fn test_edit_item_replaces_list_field() {
        let block = Block::new("s", BlockKind::Services).with_field(
            "services",
            json!([{ "name": "Audit", "description": "We look", "extra": 1 }]),
        );
        let panel = PropertyPanel::for_block(&block);

        let edit = panel.edit_item("services", 0, "name", "Deep audit").unwrap();
        assert_eq!(edit.field, "services");
        assert_eq!(
            edit.value,
            json!([{ "name": "Deep audit", "description": "We look", "extra": 1 }])
        );

        assert!(panel.edit_item("services", 5, "name", "x").is_none());
        assert!(panel.edit_item("title", 0, "name", "x").is_none());
    }

    #[test]
    fn test_add_and_remove_items() {
        let panel = PropertyPanel::for_block(&create_block(BlockKind::Gallery));

        let added = panel.add_item("images").unwrap();
        let items = added.value.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3]["alt"], json!("Gallery image"));

        let removed = panel.remove_item("images", 0).unwrap();
        assert_eq!(removed.value.as_array().unwrap().len(), 2);
        assert!(panel.remove_item("images", 9).is_none());
    }

    #[test]
    fn test_removing_last_item_falls_back_to_default_group() {
        let block = Block::new("s", BlockKind::Services)
            .with_field("services", json!([{ "name": "Audit", "description": "We look" }]));
        let panel = PropertyPanel::for_block(&block);

        // An empty group reads as absent, like every other empty field
        let removed = panel.remove_item("services", 0).unwrap();
        assert_eq!(removed.value, json!([]));

        let doc = Document::from_blocks(vec![block]).unwrap();
        let doc = removed.apply(&doc).unwrap();
        let panel = PropertyPanel::for_block(doc.get(&BlockId::from("s")).unwrap());
        let control = panel.control("services").unwrap();
        let Input::Repeater { items } = &control.input else {
            panic!("expected repeater");
        };
        assert!(control.is_default);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0][0].input, Input::Text { value: "Web Design".to_string() });
    }

    #[test]
    fn test_unknown_kind_exposes_stored_scalars() {
        let block = Block::new("x", BlockKind::from_tag("banner"))
            .with_field("headline", "Sale")
            .with_field("slides", json!([1, 2]));
        let panel = PropertyPanel::for_block(&block);
        assert_eq!(panel.controls.len(), 1);
        assert_eq!(panel.controls[0].field, "headline");
    }

    #[test]
    fn test_image_preview_is_sanitised() {
        let block = create_block(BlockKind::About).with_field("image", "javascript:alert(1)");
        let panel = PropertyPanel::for_block(&block);
        match &panel.control("image").unwrap().input {
            Input::Image { value, preview } => {
                assert_eq!(value, "javascript:alert(1)");
                assert_eq!(preview, "#");
            }
            other => panic!("expected image input, got {:?}", other),
        }
    }
}

use crate::{default_content, BlockId, BlockKind, TypedContent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw content of a block, keyed by field name
pub type ContentMap = serde_json::Map<String, Value>;

/// One content section of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,

    #[serde(rename = "type")]
    pub kind: BlockKind,

    /// Display label; empty means "use the type tag"
    #[serde(default)]
    pub name: String,

    /// Included in the public and preview renders
    #[serde(default = "default_visible")]
    pub visible: bool,

    #[serde(default)]
    pub content: ContentMap,
}

fn default_visible() -> bool {
    true
}

impl Block {
    /// Block with an explicit id and empty content
    pub fn new(id: impl Into<BlockId>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            name: kind.label().to_string(),
            kind,
            visible: true,
            content: ContentMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_content(mut self, content: ContentMap) -> Self {
        self.content = content;
        self
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(field.into(), value.into());
        self
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.kind.as_str()
        } else {
            &self.name
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.content.get(name)
    }

    /// Typed view of the content with defaults applied
    pub fn typed(&self) -> TypedContent {
        TypedContent::resolve(&self.kind, &self.content)
    }
}

/// Create a block from the palette: fresh id, visible, default content
pub fn create_block(kind: BlockKind) -> Block {
    let id = BlockId::generate(&kind);
    let content = default_content(&kind);
    Block::new(id, kind).with_content(content)
}

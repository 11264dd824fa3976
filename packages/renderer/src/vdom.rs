use crate::RenderMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
        /// Reconciliation key (block id for block-level nodes)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    /// Element holding a single text child
    pub fn text_element(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self::element(tag).with_child(Self::text(content))
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Append to the `class` attribute
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            let class = class.as_ref();
            attributes
                .entry("class".to_string())
                .and_modify(|existing| {
                    existing.push(' ');
                    existing.push_str(class);
                })
                .or_insert_with(|| class.to_string());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            VNode::Element { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Text { content } => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(content);
            }
            VNode::Element { children, .. } => {
                children.iter().for_each(|child| child.collect_text(out));
            }
            VNode::Comment { .. } => {}
        }
    }

    /// Depth-first search for the first node matching `predicate`
    pub fn find(&self, predicate: &impl Fn(&VNode) -> bool) -> Option<&VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(predicate))
    }
}

/// Rendered page: root nodes plus the mode they were rendered for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualPage {
    pub mode: RenderMode,
    pub nodes: Vec<VNode>,
}

impl VirtualPage {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            nodes: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn text_content(&self) -> String {
        self.nodes
            .iter()
            .map(VNode::text_content)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn find(&self, predicate: impl Fn(&VNode) -> bool) -> Option<&VNode> {
        self.nodes.iter().find_map(|node| node.find(&predicate))
    }

    /// Block-level nodes (those keyed by a block id) in render order
    pub fn block_keys(&self) -> Vec<&str> {
        fn collect<'a>(node: &'a VNode, out: &mut Vec<&'a str>) {
            if let Some(key) = node.key() {
                out.push(key);
                return;
            }
            node.children().iter().for_each(|child| collect(child, out));
        }

        let mut out = Vec::new();
        self.nodes.iter().for_each(|node| collect(node, &mut out));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_helpers() {
        let node = VNode::element("section")
            .with_class("sc-section")
            .with_class("sc-hero")
            .with_attr("id", "hero")
            .with_style("color", "red")
            .with_key("hero-1")
            .with_child(VNode::text_element("h1", "Welcome"));

        assert_eq!(node.tag(), Some("section"));
        assert_eq!(node.attr("class"), Some("sc-section sc-hero"));
        assert!(node.has_class("sc-hero"));
        assert!(!node.has_class("sc"));
        assert_eq!(node.key(), Some("hero-1"));
        assert_eq!(node.text_content(), "Welcome");
    }

    #[test]
    fn test_builders_ignore_non_elements() {
        let node = VNode::text("plain").with_attr("id", "x").with_child(VNode::text("y"));
        assert_eq!(node, VNode::text("plain"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_text_content_skips_comments() {
        let node = VNode::element("div")
            .with_child(VNode::comment("hidden"))
            .with_child(VNode::text_element("p", "One"))
            .with_child(VNode::text_element("p", "Two"));
        assert_eq!(node.text_content(), "One Two");
    }

    #[test]
    fn test_block_keys_stop_at_first_keyed_node() {
        let mut page = VirtualPage::new(RenderMode::Public);
        page.add_node(
            VNode::element("main")
                .with_child(VNode::element("section").with_key("a").with_child(
                    VNode::element("div").with_key("nested"),
                ))
                .with_child(VNode::element("section").with_key("b")),
        );
        assert_eq!(page.block_keys(), vec!["a", "b"]);
    }
}

//! # Render
//!
//! One render path for all three views of a document:
//!
//! ```text
//!              ┌── Edit    → every block, framed with toolbar + drag handle
//! Document ────┼── Preview → list_visible(), bare sections
//!              └── Public  → list_visible(), bare sections
//! ```
//!
//! Rendering is infallible. Unknown kinds become placeholders and content
//! problems resolve to defaults inside the section builders.

use crate::sections::section;
use crate::{RenderMode, RenderOptions, VNode, VirtualPage};
use sitecraft_document::Document;
use sitecraft_schema::Block;
use std::collections::HashSet;
use tracing::{debug, instrument};

pub const EMPTY_CANVAS_TEXT: &str = "Drag a block from the palette to start building your page";
pub const COMING_SOON_TITLE: &str = "Coming soon";
pub const COMING_SOON_TEXT: &str = "This page is under construction. Check back shortly!";

/// Render a document for the given mode
#[instrument(skip_all, fields(mode = %options.mode, blocks = doc.len()))]
pub fn render(doc: &Document, options: &RenderOptions) -> VirtualPage {
    let blocks: Vec<&Block> = if options.mode.includes_hidden() {
        doc.iter().collect()
    } else {
        doc.list_visible()
    };

    let mut anchors = HashSet::new();
    let mut children = Vec::with_capacity(blocks.len());

    // Edit mode renders the unfiltered list, so `index` is the document index there
    for (index, block) in blocks.iter().enumerate() {
        let mut node = section(block);

        // First block of each known kind doubles as an in-page anchor (#contact, ...)
        if block.kind.is_known() && anchors.insert(block.kind.as_str()) {
            node = node.with_attr("id", block.kind.as_str());
        }

        if !block.kind.is_known() {
            debug!(block_id = %block.id, kind = %block.kind, "Rendering placeholder for unknown block type");
        }

        if options.mode.is_editable() {
            node = block_frame(block, index, doc.len(), options, node);
        }
        children.push(node);
    }

    if children.is_empty() {
        children.push(empty_state(options.mode));
    }

    debug!(rendered = blocks.len(), "Document rendered");

    let mut page = VirtualPage::new(options.mode);
    page.add_node(
        VNode::element("main")
            .with_class("sc-page")
            .with_class(format!("sc-page--{}", options.mode))
            .with_attr("data-mode", options.mode.as_str())
            .with_children(children),
    );
    page
}

/// Editing affordances around one section
fn block_frame(
    block: &Block,
    index: usize,
    len: usize,
    options: &RenderOptions,
    content: VNode,
) -> VNode {
    let mut frame = VNode::element("div")
        .with_class("sc-block")
        .with_attr("data-block-id", block.id.as_str())
        .with_attr("data-index", index.to_string())
        .with_attr("draggable", "true")
        .with_key(block.id.as_str());

    if options.selected.as_ref() == Some(&block.id) {
        frame = frame.with_class("sc-block--selected");
    }
    if !block.visible {
        frame = frame.with_class("sc-block--hidden");
    }

    let toolbar = VNode::element("div")
        .with_class("sc-block-toolbar")
        .with_child(VNode::text_element("span", block.display_name()).with_class("sc-block-label"))
        .with_child(toolbar_button("move-up", "Move up", index == 0))
        .with_child(toolbar_button("move-down", "Move down", index + 1 >= len))
        .with_child(toolbar_button(
            "toggle-visibility",
            if block.visible { "Hide" } else { "Show" },
            false,
        ))
        .with_child(toolbar_button("delete", "Delete", false));

    // The frame owns the key; the inner section drops it so keys stay unique
    let content = match content {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => VNode::Element {
            tag,
            attributes,
            styles,
            children,
            key: None,
        },
        other => other,
    };

    frame.with_child(toolbar).with_child(content)
}

fn toolbar_button(action: &str, label: &str, disabled: bool) -> VNode {
    let button = VNode::text_element("button", label)
        .with_attr("type", "button")
        .with_attr("data-action", action);
    if disabled {
        button.with_attr("disabled", "")
    } else {
        button
    }
}

fn empty_state(mode: RenderMode) -> VNode {
    match mode {
        RenderMode::Edit => VNode::element("div")
            .with_class("sc-empty")
            .with_class("sc-drop-zone")
            .with_child(VNode::text_element("p", EMPTY_CANVAS_TEXT)),
        RenderMode::Preview | RenderMode::Public => VNode::element("div")
            .with_class("sc-empty")
            .with_class("sc-coming-soon")
            .with_child(VNode::text_element("h1", COMING_SOON_TITLE))
            .with_child(VNode::text_element("p", COMING_SOON_TEXT)),
    }
}

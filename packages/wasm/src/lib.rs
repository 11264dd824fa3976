//! Browser bindings. Every export takes and returns JSON strings so the
//! editor UI and the published site run the same Rust pipeline.
//!
//! Errors reach JavaScript as a JSON string `{"code": "...", "message": "..."}`.

use serde::Serialize;
use serde_json::json;
use sitecraft_document::{Document, DocumentError};
use sitecraft_editor::Mutation;
use sitecraft_linter::{lint_source, LintOptions};
use sitecraft_renderer::{
    render, render_public_html, to_html, HtmlOptions, PropertyPanel, RenderMode, RenderOptions,
};
use sitecraft_schema::{create_block, default_content, fields, BlockId, BlockKind};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Error crossing the JS boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
struct BindingError {
    code: &'static str,
    message: String,
}

impl BindingError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn into_js(self) -> JsValue {
        JsValue::from_str(&json!({ "code": self.code, "message": self.message }).to_string())
    }
}

impl From<DocumentError> for BindingError {
    fn from(err: DocumentError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, BindingError> {
    serde_json::to_string(value).map_err(|e| BindingError::new("serialization", e.to_string()))
}

fn load(payload: &str) -> Result<Document, BindingError> {
    Ok(Document::from_json(payload)?)
}

fn palette_impl() -> Result<String, BindingError> {
    let palette: Vec<_> = BlockKind::palette()
        .iter()
        .map(|kind| {
            json!({
                "type": kind.as_str(),
                "label": kind.label(),
                "fields": fields(kind).iter().map(|spec| spec.name).collect::<Vec<_>>(),
            })
        })
        .collect();
    to_json(&palette)
}

fn apply_mutation_impl(payload: &str, mutation: &str) -> Result<String, BindingError> {
    let doc = load(payload)?;
    let mutation: Mutation = serde_json::from_str(mutation)
        .map_err(|e| BindingError::new("invalid_mutation", e.to_string()))?;
    Ok(mutation.apply(&doc)?.to_json()?)
}

fn render_html_impl(
    payload: &str,
    mode: &str,
    selected_id: Option<String>,
) -> Result<String, BindingError> {
    let doc = load(payload)?;
    let mode: RenderMode = mode
        .parse()
        .map_err(|e: String| BindingError::new("invalid_mode", e))?;
    let options = RenderOptions::new(mode).with_selected(selected_id.map(BlockId::from));
    Ok(to_html(&render(&doc, &options), &HtmlOptions::compact()))
}

fn render_public_page_impl(payload: &str, title: Option<String>) -> Result<String, BindingError> {
    let doc = load(payload)?;
    let mut options = HtmlOptions::default();
    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        options.title = title;
    }
    Ok(render_public_html(&doc, &options))
}

fn property_panel_impl(payload: &str, block_id: &str) -> Result<String, BindingError> {
    let doc = load(payload)?;
    let id = BlockId::from(block_id);
    let block = doc
        .get(&id)
        .ok_or_else(|| DocumentError::BlockNotFound(id.clone()))?;
    to_json(&PropertyPanel::for_block(block))
}

fn lint_impl(payload: &str) -> Result<String, BindingError> {
    let diagnostics = lint_source(payload, LintOptions::default())?;
    to_json(&diagnostics)
}

/// Block kinds offered by the editor, with labels and field names
#[wasm_bindgen(js_name = palette)]
pub fn palette_js() -> Result<String, JsValue> {
    palette_impl().map_err(BindingError::into_js)
}

/// New block of `type` with a fresh id and default content
#[wasm_bindgen(js_name = createBlock)]
pub fn create_block_js(block_type: &str) -> Result<String, JsValue> {
    to_json(&create_block(BlockKind::from_tag(block_type))).map_err(BindingError::into_js)
}

/// Default content for `type`; `{}` for unknown types
#[wasm_bindgen(js_name = defaultContent)]
pub fn default_content_js(block_type: &str) -> Result<String, JsValue> {
    to_json(&default_content(&BlockKind::from_tag(block_type))).map_err(BindingError::into_js)
}

/// Apply one serialized mutation, returning the new payload
#[wasm_bindgen(js_name = applyMutation)]
pub fn apply_mutation_js(payload: &str, mutation: &str) -> Result<String, JsValue> {
    apply_mutation_impl(payload, mutation).map_err(BindingError::into_js)
}

/// HTML fragment for the canvas (`edit`), preview or public view
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html_js(
    payload: &str,
    mode: &str,
    selected_id: Option<String>,
) -> Result<String, JsValue> {
    render_html_impl(payload, mode, selected_id).map_err(BindingError::into_js)
}

/// Complete published page
#[wasm_bindgen(js_name = renderPublicPage)]
pub fn render_public_page_js(payload: &str, title: Option<String>) -> Result<String, JsValue> {
    render_public_page_impl(payload, title).map_err(BindingError::into_js)
}

/// Property panel controls for one block
#[wasm_bindgen(js_name = propertyPanel)]
pub fn property_panel_js(payload: &str, block_id: &str) -> Result<String, JsValue> {
    property_panel_impl(payload, block_id).map_err(BindingError::into_js)
}

/// Lint diagnostics for a stored payload
#[wasm_bindgen(js_name = lint)]
pub fn lint_js(payload: &str) -> Result<String, JsValue> {
    lint_impl(payload).map_err(BindingError::into_js)
}

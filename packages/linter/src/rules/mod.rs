mod duplicate_block_id;
mod empty_document;
mod malformed_block_entry;
mod malformed_field;
mod unknown_block_type;
mod unknown_field;
mod unsafe_url;

pub use duplicate_block_id::DuplicateBlockIdRule;
pub use empty_document::EmptyDocumentRule;
pub use malformed_block_entry::MalformedBlockEntryRule;
pub use malformed_field::MalformedFieldRule;
pub use unknown_block_type::UnknownBlockTypeRule;
pub use unknown_field::UnknownFieldRule;
pub use unsafe_url::UnsafeUrlRule;

use crate::diagnostic::Diagnostic;
use serde_json::{Map, Value};
use sitecraft_document::Document;
use sitecraft_schema::Block;

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check one block in isolation
    fn check_block(&self, _block: &Block) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check properties of the whole document
    fn check_document(&self, _document: &Document) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check a stored payload before loading repairs it
    fn check_payload(&self, _payload: &Value) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(UnknownFieldRule),
                Box::new(MalformedFieldRule),
                Box::new(UnknownBlockTypeRule),
                Box::new(DuplicateBlockIdRule),
                Box::new(MalformedBlockEntryRule),
                Box::new(UnsafeUrlRule),
                Box::new(EmptyDocumentRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

/// Human name for the JSON shape of a value
pub(crate) fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// `services[2].name` style path for list item fields
pub(crate) fn item_path(list: &str, index: usize, field: &str) -> String {
    format!("{}[{}].{}", list, index, field)
}

/// Raw block entries of a payload, with their position in the `blocks` list
pub(crate) fn payload_entries(payload: &Value) -> impl Iterator<Item = (usize, &Map<String, Value>)> {
    payload
        .get("blocks")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(index, entry)| entry.as_object().map(|fields| (index, fields)))
}

/// The id a payload entry loads with, if it carries a usable one
pub(crate) fn payload_id(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

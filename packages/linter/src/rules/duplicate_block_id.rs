use crate::diagnostic::Diagnostic;
use crate::rules::{payload_entries, payload_id, LintRule};
use serde_json::Value;
use sitecraft_document::Document;
use sitecraft_schema::BlockId;
use std::collections::HashMap;

/// Ids shared by more than one block
pub struct DuplicateBlockIdRule;

impl LintRule for DuplicateBlockIdRule {
    fn name(&self) -> &'static str {
        "duplicate-block-id"
    }

    fn description(&self) -> &'static str {
        "Block ids must be unique within a document"
    }

    fn check_document(&self, document: &Document) -> Vec<Diagnostic> {
        self.repeats(
            document
                .iter()
                .enumerate()
                .map(|(index, block)| (index, block.id.clone())),
        )
    }

    /// Loading replaces repeated ids, so they are only visible in the raw entries
    fn check_payload(&self, payload: &Value) -> Vec<Diagnostic> {
        self.repeats(
            payload_entries(payload)
                .filter_map(|(index, fields)| payload_id(fields).map(|id| (index, BlockId::new(id)))),
        )
    }
}

impl DuplicateBlockIdRule {
    fn repeats(&self, ids: impl Iterator<Item = (usize, BlockId)>) -> Vec<Diagnostic> {
        let mut first_seen = HashMap::new();
        let mut diagnostics = Vec::new();

        for (index, id) in ids {
            if let Some(first) = first_seen.get(&id) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "Block id '{}' at position {} is already used at position {}",
                            id, index, first
                        ),
                    )
                    .with_block(&id)
                    .with_suggestion("Give the block a new id; editing by id is ambiguous until then"),
                );
            } else {
                first_seen.insert(id, index);
            }
        }

        diagnostics
    }
}

use crate::diagnostic::Diagnostic;
use crate::rules::{payload_entries, payload_id, shape, LintRule};
use serde_json::Value;
use sitecraft_schema::BlockId;

/// Payload entries that loading has to repair
pub struct MalformedBlockEntryRule;

impl LintRule for MalformedBlockEntryRule {
    fn name(&self) -> &'static str {
        "malformed-block-entry"
    }

    fn description(&self) -> &'static str {
        "Block entries must be objects with a string id, boolean visible and object content"
    }

    fn check_payload(&self, payload: &Value) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        match payload.get("blocks") {
            Some(Value::Array(entries)) => {
                for (index, entry) in entries.iter().enumerate() {
                    if !entry.is_object() {
                        diagnostics.push(Diagnostic::warning(
                            self.name(),
                            format!(
                                "Entry at position {} is {}, not a block; it is skipped",
                                index,
                                shape(entry)
                            ),
                        ));
                    }
                }
            }
            Some(other) => {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("`blocks` is {}, not a list; the page loads empty", shape(other)),
                    )
                    .with_field("blocks"),
                );
                return diagnostics;
            }
            None => return diagnostics,
        }

        for (index, fields) in payload_entries(payload) {
            let id = payload_id(fields).map(BlockId::new);
            let mut report = |field: &str, message: String| {
                let diagnostic = Diagnostic::warning(self.name(), message).with_field(field);
                diagnostics.push(match &id {
                    Some(id) => diagnostic.with_block(id),
                    None => diagnostic,
                });
            };

            if id.is_none() {
                let found = fields.get("id").map_or("missing", shape);
                report(
                    "id",
                    format!("Block at position {} has no usable id ({}); a new one is generated on load", index, found),
                );
            }

            match fields.get("name") {
                None | Some(Value::String(_)) => {}
                Some(other) => report(
                    "name",
                    format!("Block at position {} has {} as its name; the type is shown instead", index, shape(other)),
                ),
            }

            match fields.get("visible") {
                None | Some(Value::Bool(_)) => {}
                Some(other) => report(
                    "visible",
                    format!("Block at position {} has {} for `visible`; it is treated as visible", index, shape(other)),
                ),
            }

            match fields.get("content") {
                None | Some(Value::Null) | Some(Value::Object(_)) => {}
                Some(other) => report(
                    "content",
                    format!("Block at position {} has {} as content; it is dropped and defaults apply", index, shape(other)),
                ),
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics
            .iter()
            .map(|d| d.field.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_well_formed_entries_are_clean() {
        let payload = json!({
            "blocks": [
                { "id": "a", "type": "hero", "name": "Hero", "visible": false, "content": {} },
                { "id": 3, "type": "about" }
            ]
        });
        assert!(MalformedBlockEntryRule.check_payload(&payload).is_empty());
    }

    #[test]
    fn test_reports_each_repair() {
        let payload = json!({
            "blocks": [
                { "id": "a", "type": "hero", "visible": "yes" },
                42,
                { "type": "about", "content": [] },
                { "id": "", "type": "footer", "name": 5 }
            ]
        });

        let diagnostics = MalformedBlockEntryRule.check_payload(&payload);
        assert_eq!(fields(&diagnostics), vec!["", "visible", "id", "content", "id", "name"]);
        assert!(diagnostics[0].message.contains("position 1 is a number"));
        assert_eq!(diagnostics[1].block_id, Some(BlockId::from("a")));
        assert_eq!(diagnostics[2].block_id, None);
        assert!(diagnostics.iter().all(|d| !d.is_error()));
    }

    #[test]
    fn test_blocks_that_are_not_a_list() {
        let diagnostics = MalformedBlockEntryRule.check_payload(&json!({ "blocks": "none" }));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field.as_deref(), Some("blocks"));

        assert!(MalformedBlockEntryRule.check_payload(&json!({})).is_empty());
    }
}

use crate::diagnostic::Diagnostic;
use crate::rules::{item_path, LintRule};
use serde_json::Value;
use sitecraft_schema::{field_spec, Block};

/// Content fields the block's schema does not declare
pub struct UnknownFieldRule;

impl LintRule for UnknownFieldRule {
    fn name(&self) -> &'static str {
        "unknown-field"
    }

    fn description(&self) -> &'static str {
        "Flag content fields that the block type does not use"
    }

    fn check_block(&self, block: &Block) -> Vec<Diagnostic> {
        // Unknown kinds have no schema to compare against
        if !block.kind.is_known() {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();

        for (name, value) in &block.content {
            let Some(spec) = field_spec(&block.kind, name) else {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("'{}' blocks have no field '{}'", block.kind, name),
                    )
                    .with_block(&block.id)
                    .with_field(name.as_str())
                    .with_suggestion("The field is kept but never rendered; remove it or check its spelling"),
                );
                continue;
            };

            let item_fields = spec.item_fields();
            let Value::Array(items) = value else {
                continue;
            };
            if item_fields.is_empty() {
                continue;
            }

            for (index, item) in items.iter().enumerate() {
                let Value::Object(record) = item else {
                    continue;
                };
                for key in record.keys() {
                    if !item_fields.iter().any(|field| field.name == key.as_str()) {
                        diagnostics.push(
                            Diagnostic::warning(
                                self.name(),
                                format!("'{}' items have no field '{}'", spec.name, key),
                            )
                            .with_block(&block.id)
                            .with_field(item_path(spec.name, index, key)),
                        );
                    }
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitecraft_schema::BlockKind;

    #[test]
    fn test_flags_unknown_top_level_field() {
        let block = Block::new("hero-1", BlockKind::Hero).with_field("subtitel", "Typo");

        let diagnostics = UnknownFieldRule.check_block(&block);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field.as_deref(), Some("subtitel"));
    }

    #[test]
    fn test_flags_unknown_item_field() {
        let block = Block::new("gallery-1", BlockKind::Gallery)
            .with_field("images", json!([{"url": "/a.png", "caption": "A"}]));

        let diagnostics = UnknownFieldRule.check_block(&block);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field.as_deref(), Some("images[0].caption"));
    }

    #[test]
    fn test_ignores_unknown_kinds() {
        let block = Block::new("x-1", BlockKind::from_tag("map")).with_field("lat", 1.5);
        assert!(UnknownFieldRule.check_block(&block).is_empty());
    }
}

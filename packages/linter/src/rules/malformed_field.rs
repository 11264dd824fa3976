use crate::diagnostic::Diagnostic;
use crate::rules::{item_path, shape, LintRule};
use serde_json::Value;
use sitecraft_schema::{fields, Block, FieldKind, FieldSpec};

/// Values whose shape the renderer cannot use, so it falls back to defaults
pub struct MalformedFieldRule;

impl LintRule for MalformedFieldRule {
    fn name(&self) -> &'static str {
        "malformed-field"
    }

    fn description(&self) -> &'static str {
        "Flag content values with the wrong shape for their field"
    }

    fn check_block(&self, block: &Block) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for spec in fields(&block.kind) {
            let Some(value) = block.content.get(spec.name) else {
                continue;
            };

            match spec.kind {
                FieldKind::List { item } => match value {
                    Value::Array(items) => {
                        for (index, entry) in items.iter().enumerate() {
                            check_item(self, block, spec, item, index, entry, &mut diagnostics);
                        }
                    }
                    Value::Null => {}
                    other => diagnostics.push(
                        malformed(self, block, spec.name, "a list", other)
                            .with_suggestion("The default list is shown instead"),
                    ),
                },
                _ => {
                    if !is_scalar(value) {
                        diagnostics.push(
                            malformed(self, block, spec.name, "text", value)
                                .with_suggestion("The default value is shown instead"),
                        );
                    }
                }
            }
        }

        diagnostics
    }
}

fn check_item(
    rule: &MalformedFieldRule,
    block: &Block,
    list: &FieldSpec,
    item_fields: &[FieldSpec],
    index: usize,
    entry: &Value,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Value::Object(record) = entry else {
        diagnostics.push(
            malformed(rule, block, &format!("{}[{}]", list.name, index), "an object", entry)
                .with_suggestion("The entry is skipped when rendering"),
        );
        return;
    };

    for field in item_fields {
        if let Some(value) = record.get(field.name) {
            if !is_scalar(value) {
                diagnostics.push(malformed(
                    rule,
                    block,
                    &item_path(list.name, index, field.name),
                    "text",
                    value,
                ));
            }
        }
    }
}

/// Text, or something that reads as text
fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Null)
}

fn malformed(
    rule: &MalformedFieldRule,
    block: &Block,
    field: &str,
    expected: &str,
    found: &Value,
) -> Diagnostic {
    Diagnostic::warning(
        rule.name(),
        format!("'{}' should be {}, found {}", field, expected, shape(found)),
    )
    .with_block(&block.id)
    .with_field(field)
}

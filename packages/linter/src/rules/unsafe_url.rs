use crate::diagnostic::Diagnostic;
use crate::rules::{item_path, LintRule};
use serde_json::Value;
use sitecraft_schema::{fields, is_script_url, Block, FieldKind};

/// Link and image fields carrying `javascript:` style targets
pub struct UnsafeUrlRule;

impl LintRule for UnsafeUrlRule {
    fn name(&self) -> &'static str {
        "unsafe-url"
    }

    fn description(&self) -> &'static str {
        "Disallow script URLs in link and image fields"
    }

    fn check_block(&self, block: &Block) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for spec in fields(&block.kind) {
            match spec.kind {
                FieldKind::List { item } => {
                    let items = block.content.get(spec.name).and_then(Value::as_array);
                    let records = items
                        .into_iter()
                        .flatten()
                        .enumerate()
                        .filter_map(|(index, entry)| Some((index, entry.as_object()?)));
                    for (index, record) in records {
                        for field in item.iter().filter(|field| field.kind.is_url()) {
                            if let Some(url) = unsafe_value(record.get(field.name)) {
                                diagnostics.push(self.report(
                                    block,
                                    item_path(spec.name, index, field.name),
                                    url,
                                ));
                            }
                        }
                    }
                }
                kind if kind.is_url() => {
                    if let Some(url) = unsafe_value(block.content.get(spec.name)) {
                        diagnostics.push(self.report(block, spec.name.to_string(), url));
                    }
                }
                _ => {}
            }
        }

        diagnostics
    }
}

impl UnsafeUrlRule {
    fn report(&self, block: &Block, field: String, url: &str) -> Diagnostic {
        Diagnostic::error(
            self.name(),
            format!("'{}' uses a script URL: {}", field, url),
        )
        .with_block(&block.id)
        .with_field(field)
        .with_suggestion("Script URLs are replaced with '#' when published; use an http(s), mailto: or #anchor link")
    }
}

fn unsafe_value(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|url| is_script_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitecraft_schema::BlockKind;

    #[test]
    fn test_flags_script_link() {
        let block =
            Block::new("hero-1", BlockKind::Hero).with_field("buttonUrl", " JavaScript:alert(1)");

        let diagnostics = UnsafeUrlRule.check_block(&block);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field.as_deref(), Some("buttonUrl"));
    }

    #[test]
    fn test_flags_script_image_in_list() {
        let block = Block::new("gallery-1", BlockKind::Gallery).with_field(
            "images",
            json!([{"url": "/ok.png"}, {"url": "data:text/html,<b>x</b>"}]),
        );

        let diagnostics = UnsafeUrlRule.check_block(&block);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field.as_deref(), Some("images[1].url"));
    }

    #[test]
    fn test_allows_regular_links() {
        let block = Block::new("hero-1", BlockKind::Hero)
            .with_field("buttonUrl", "#contact")
            .with_field("backgroundImage", "data:image/png;base64,AAAA");
        assert!(UnsafeUrlRule.check_block(&block).is_empty());
    }

    #[test]
    fn test_text_fields_are_not_urls() {
        let block = Block::new("about-1", BlockKind::About)
            .with_field("description", "javascript: the good parts");
        assert!(UnsafeUrlRule.check_block(&block).is_empty());
    }
}

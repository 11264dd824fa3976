use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use sitecraft_document::Document;

/// Documents that publish as the "coming soon" page
pub struct EmptyDocumentRule;

impl LintRule for EmptyDocumentRule {
    fn name(&self) -> &'static str {
        "empty-document"
    }

    fn description(&self) -> &'static str {
        "Report pages with no visible blocks"
    }

    fn check_document(&self, document: &Document) -> Vec<Diagnostic> {
        if !document.list_visible().is_empty() {
            return Vec::new();
        }

        let message = if document.is_empty() {
            "The page has no blocks".to_string()
        } else {
            format!("All {} blocks are hidden", document.len())
        };

        vec![Diagnostic::info(self.name(), message)
            .with_suggestion("Visitors will see the \"coming soon\" page")]
    }
}

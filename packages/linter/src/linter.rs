use crate::diagnostic::Diagnostic;
use crate::rules::RuleRegistry;
use serde_json::Value;
use sitecraft_document::{Document, DocumentError};
use tracing::debug;

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a document and return diagnostics, block rules first in document
/// order, then document-wide rules
pub fn lint_document(document: &Document, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    check_document(document, &registry)
}

/// Lint a stored payload as written.
///
/// The document rules see the payload after the lenient load, which already
/// replaces duplicate ids and drops malformed values. Payload rules run over
/// the raw JSON so those defects are still reported.
pub fn lint_source(source: &str, options: LintOptions) -> Result<Vec<Diagnostic>, DocumentError> {
    let payload: Value = serde_json::from_str(source)?;
    let registry = options.registry.unwrap_or_default();

    let mut diagnostics = check_document(&Document::from_payload(&payload), &registry);
    for rule in registry.rules() {
        diagnostics.extend(rule.check_payload(&payload));
    }

    Ok(diagnostics)
}

fn check_document(document: &Document, registry: &RuleRegistry) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for block in document {
        for rule in registry.rules() {
            diagnostics.extend(rule.check_block(block));
        }
    }

    for rule in registry.rules() {
        diagnostics.extend(rule.check_document(document));
    }

    debug!(
        blocks = document.len(),
        diagnostics = diagnostics.len(),
        "Linted document"
    );

    diagnostics
}

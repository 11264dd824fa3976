//! Non-fatal checks over block documents.
//!
//! Rendering tolerates every problem reported here by falling back to
//! defaults or placeholders; diagnostics explain what the visitor will see
//! instead of what the author wrote.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{has_errors, Diagnostic, DiagnosticLevel};
pub use linter::{lint_document, lint_source, LintOptions};
pub use rules::{
    DuplicateBlockIdRule, EmptyDocumentRule, LintRule, MalformedBlockEntryRule, MalformedFieldRule,
    RuleRegistry, UnknownBlockTypeRule, UnknownFieldRule, UnsafeUrlRule,
};

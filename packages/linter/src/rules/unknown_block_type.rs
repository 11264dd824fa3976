use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use sitecraft_schema::{Block, BlockKind};

/// Block kinds this build does not know how to render
pub struct UnknownBlockTypeRule;

impl LintRule for UnknownBlockTypeRule {
    fn name(&self) -> &'static str {
        "unknown-block-type"
    }

    fn description(&self) -> &'static str {
        "Report blocks that render as placeholders"
    }

    fn check_block(&self, block: &Block) -> Vec<Diagnostic> {
        if block.kind.is_known() {
            return Vec::new();
        }

        let palette = BlockKind::palette();
        let known: Vec<&str> = palette.iter().map(BlockKind::as_str).collect();
        let message = if block.kind.as_str().is_empty() {
            format!("Block '{}' has no type and renders as a placeholder", block.id)
        } else {
            format!(
                "Unknown block type '{}' renders as a placeholder",
                block.kind
            )
        };

        vec![Diagnostic::info(self.name(), message)
            .with_block(&block.id)
            .with_suggestion(format!("Known types: {}", known.join(", ")))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_unknown_kind() {
        let block = Block::new("x-1", BlockKind::from_tag("carousel"));

        let diagnostics = UnknownBlockTypeRule.check_block(&block);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Unknown block type 'carousel' renders as a placeholder"
        );
    }

    #[test]
    fn test_known_kinds_pass() {
        for kind in BlockKind::palette() {
            let block = Block::new("b-1", kind);
            assert!(UnknownBlockTypeRule.check_block(&block).is_empty());
        }
    }
}

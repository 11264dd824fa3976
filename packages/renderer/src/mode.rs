use serde::{Deserialize, Serialize};
use sitecraft_schema::BlockId;
use std::fmt;
use std::str::FromStr;

/// Which of the three views of a document is being rendered.
///
/// The modes share one render path; they only differ in which blocks are
/// included and whether editing affordances are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Editor canvas: every block, with selection and drag affordances
    #[default]
    Edit,
    /// Editor preview: visible blocks only, no affordances
    Preview,
    /// Published page shown to end users
    Public,
}

impl RenderMode {
    /// Hidden blocks are only shown while editing
    pub fn includes_hidden(&self) -> bool {
        matches!(self, RenderMode::Edit)
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, RenderMode::Edit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Edit => "edit",
            RenderMode::Preview => "preview",
            RenderMode::Public => "public",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(RenderMode::Edit),
            "preview" => Ok(RenderMode::Preview),
            "public" => Ok(RenderMode::Public),
            other => Err(format!(
                "Invalid render mode: {}. Use: edit, preview, or public",
                other
            )),
        }
    }
}

/// Options for [`render`](crate::render)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Block highlighted on the edit canvas
    pub selected: Option<BlockId>,
}

impl RenderOptions {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            selected: None,
        }
    }

    pub fn edit() -> Self {
        Self::new(RenderMode::Edit)
    }

    pub fn preview() -> Self {
        Self::new(RenderMode::Preview)
    }

    pub fn public() -> Self {
        Self::new(RenderMode::Public)
    }

    pub fn with_selected(mut self, selected: Option<BlockId>) -> Self {
        self.selected = selected;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("preview".parse::<RenderMode>(), Ok(RenderMode::Preview));
        assert!("draft".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_only_edit_mode_shows_hidden_blocks() {
        assert!(RenderMode::Edit.includes_hidden());
        assert!(!RenderMode::Preview.includes_hidden());
        assert!(!RenderMode::Public.includes_hidden());
    }
}

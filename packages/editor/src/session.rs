//! # Edit Session Management
//!
//! Editing state for one editor tab: the document, its history, the current
//! selection and whether the canvas shows edit affordances or a preview.
//!
//! All edits go through [`EditSession::apply`] so they are versioned, marked
//! dirty and undoable. Saving is explicit and never retried.

use crate::errors::EditorError;
use crate::storage::ProjectStore;
use crate::{Mutation, UndoStack};
use sitecraft_document::{Document, DocumentError};
use sitecraft_renderer::{
    render, resolve_drop, CanvasAction, FieldEdit, PropertyPanel, RenderMode, RenderOptions,
    VirtualPage,
};
use sitecraft_schema::{create_block, BlockId, BlockKind};
use tracing::{debug, info, warn};

/// Single edit session over one project
#[derive(Debug)]
pub struct EditSession {
    project_id: String,
    document: Document,

    /// Increments on every applied mutation, undo and redo
    version: u64,

    /// Unsaved changes since the last load or successful save
    dirty: bool,

    selected: Option<BlockId>,
    view: RenderMode,
    history: UndoStack,
}

impl EditSession {
    /// Create new edit session
    pub fn new(project_id: impl Into<String>, document: Document) -> Self {
        Self {
            project_id: project_id.into(),
            document,
            version: 0,
            dirty: false,
            selected: None,
            view: RenderMode::Edit,
            history: UndoStack::new(),
        }
    }

    /// Open a stored project
    pub fn load(store: &dyn ProjectStore, project_id: &str) -> Result<Self, EditorError> {
        let document = store.load(project_id)?;
        info!(project = project_id, blocks = document.len(), "Opened project");
        Ok(Self::new(project_id, document))
    }

    /// Persist the current document. On failure the session stays dirty so
    /// the caller can offer a retry.
    pub fn save(&mut self, store: &dyn ProjectStore) -> Result<(), EditorError> {
        match store.save(&self.project_id, &self.document) {
            Ok(()) => {
                self.dirty = false;
                info!(project = %self.project_id, version = self.version, "Session saved");
                Ok(())
            }
            Err(err) => {
                warn!(project = %self.project_id, error = %err, "Save failed, changes kept");
                Err(err.into())
            }
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn view_mode(&self) -> RenderMode {
        self.view
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Apply mutation and record it for undo
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), EditorError> {
        let next = self.history.apply(&mutation, &self.document)?;
        debug!(mutation = %mutation.describe(), version = self.version + 1, "Applied mutation");
        self.commit(next);
        Ok(())
    }

    /// Add a default block of `kind` and select it
    pub fn add_block(&mut self, kind: BlockKind, at: Option<usize>) -> Result<BlockId, EditorError> {
        let block = create_block(kind);
        let id = block.id.clone();
        self.apply(Mutation::InsertBlock { block, index: at })?;
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Returns false when there was nothing to undo
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        match self.history.undo(&self.document)? {
            Some(next) => {
                self.commit(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns false when there was nothing to redo
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        match self.history.redo(&self.document)? {
            Some(next) => {
                self.commit(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Select a block, or clear the selection with `None`
    pub fn select(&mut self, block_id: Option<BlockId>) -> Result<(), EditorError> {
        if let Some(id) = &block_id {
            if !self.document.contains(id) {
                return Err(DocumentError::BlockNotFound(id.clone()).into());
            }
        }
        self.selected = block_id;
        Ok(())
    }

    /// Flip between the edit canvas and the preview, returning the new mode
    pub fn toggle_preview(&mut self) -> RenderMode {
        self.view = match self.view {
            RenderMode::Edit => RenderMode::Preview,
            _ => RenderMode::Edit,
        };
        self.view
    }

    /// Render the canvas for the current view mode
    pub fn canvas(&self) -> VirtualPage {
        let options = RenderOptions::new(self.view).with_selected(self.selected.clone());
        render(&self.document, &options)
    }

    /// Property panel for the selected block
    pub fn panel(&self) -> Option<PropertyPanel> {
        let id = self.selected.as_ref()?;
        self.document.get(id).map(PropertyPanel::for_block)
    }

    /// Apply a property panel edit
    pub fn edit_field(&mut self, edit: FieldEdit) -> Result<(), EditorError> {
        self.apply(Mutation::UpdateContent {
            block_id: edit.block_id,
            field: edit.field,
            value: edit.value,
        })
    }

    /// Drop the dragged block onto another. Returns false when the drop does
    /// not move anything.
    pub fn drop_block(&mut self, active: &BlockId, over: &BlockId) -> Result<bool, EditorError> {
        match resolve_drop(&self.document, active, over) {
            Some((from, to)) => {
                self.apply(Mutation::MoveBlock { from, to })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Apply a canvas toolbar action. Returns false for no-op actions.
    pub fn canvas_action(&mut self, action: &CanvasAction) -> Result<bool, EditorError> {
        match Mutation::from_canvas(action, &self.document)? {
            Some(mutation) => {
                self.apply(mutation)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn commit(&mut self, next: Document) {
        self.document = next;
        self.version += 1;
        self.dirty = true;

        // Selection never points at a removed block
        if let Some(id) = &self.selected {
            if !self.document.contains(id) {
                self.selected = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use sitecraft_schema::Block;

    fn session() -> EditSession {
        let doc = Document::from_blocks(vec![
            Block::new("hero-1", BlockKind::Hero),
            Block::new("about-1", BlockKind::About),
        ])
        .unwrap();
        EditSession::new("site", doc)
    }

    #[test]
    fn test_session_creation() {
        let session = session();
        assert_eq!(session.project_id(), "site");
        assert_eq!(session.version(), 0);
        assert!(!session.is_dirty());
        assert!(session.selected().is_none());
        assert_eq!(session.view_mode(), RenderMode::Edit);
    }

    #[test]
    fn test_add_block_selects_it() {
        let mut session = session();
        let id = session.add_block(BlockKind::Contact, Some(1)).unwrap();

        assert_eq!(session.document().position(&id), Some(1));
        assert_eq!(session.selected(), Some(&id));
        assert_eq!(session.version(), 1);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_removing_selected_block_clears_selection() {
        let mut session = session();
        let hero = BlockId::from("hero-1");
        session.select(Some(hero.clone())).unwrap();

        session
            .apply(Mutation::RemoveBlock { block_id: hero.clone() })
            .unwrap();
        assert!(session.selected().is_none());

        // Undo restores the block but not the selection
        assert!(session.undo().unwrap());
        assert!(session.document().contains(&hero));
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_select_unknown_block_fails() {
        let mut session = session();
        let err = session.select(Some(BlockId::from("nope"))).unwrap_err();
        assert_eq!(err.code(), "block_not_found");
    }

    #[test]
    fn test_toggle_preview_hides_affordances() {
        let mut session = session();
        assert!(session.canvas().find(|n| n.has_class("sc-block")).is_some());

        assert_eq!(session.toggle_preview(), RenderMode::Preview);
        assert!(session.canvas().find(|n| n.has_class("sc-block")).is_none());

        assert_eq!(session.toggle_preview(), RenderMode::Edit);
    }

    #[test]
    fn test_panel_follows_selection() {
        let mut session = session();
        assert!(session.panel().is_none());

        session.select(Some(BlockId::from("about-1"))).unwrap();
        let panel = session.panel().unwrap();
        assert_eq!(panel.block_id, BlockId::from("about-1"));

        session.edit_field(panel.edit_text("title", "Our story")).unwrap();
        assert_eq!(
            session.document().blocks[1].field("title").and_then(|v| v.as_str()),
            Some("Our story")
        );
    }

    #[test]
    fn test_drop_block_reorders() {
        let mut session = session();
        let moved = session
            .drop_block(&BlockId::from("about-1"), &BlockId::from("hero-1"))
            .unwrap();

        assert!(moved);
        assert_eq!(session.document().blocks[0].id, BlockId::from("about-1"));
        assert!(!session
            .drop_block(&BlockId::from("about-1"), &BlockId::from("about-1"))
            .unwrap());
    }

    #[test]
    fn test_save_clears_dirty() {
        let store = MemoryStore::new();
        let mut session = session();
        session.add_block(BlockKind::Footer, None).unwrap();

        session.save(&store).unwrap();
        assert!(!session.is_dirty());

        let reopened = EditSession::load(&store, "site").unwrap();
        assert_eq!(reopened.document(), session.document());
        assert!(!reopened.is_dirty());
    }
}

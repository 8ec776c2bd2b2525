//! # Resumark Content
//!
//! The résumé handle: one identified document, its edit history, and its
//! rendered views, plus disk persistence with a template fallback.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Render → Save
//!   ↓      ↓       ↓       ↓
//! JSON  Mutations HTML/MD JSON
//! ```

pub mod error;
pub mod store;
pub mod template;

pub use error::ContentError;
pub use store::ResumeStore;
pub use template::template_tree;

use resumark_document::{ContentTree, NodeDoc};
use resumark_editor::{Mutation, UndoStack};
use resumark_render::{render_html, render_markdown, render_page};

/// An identified, editable résumé document.
#[derive(Debug)]
pub struct ResumeContent {
    id: String,
    tree: ContentTree,
    history: UndoStack,
    /// Increments on every applied, undone or redone mutation.
    version: u64,
    dirty: bool,
}

impl ResumeContent {
    /// A fresh résumé starting from the default template.
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_tree(id, template_tree())
    }

    pub fn from_tree(id: impl Into<String>, tree: ContentTree) -> Self {
        Self {
            id: id.into(),
            tree,
            history: UndoStack::new(),
            version: 0,
            dirty: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tree(&self) -> &ContentTree {
        &self.tree
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if there are changes not yet written by a store.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Apply a mutation, recording it for undo.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<(), ContentError> {
        self.history.apply(mutation, &mut self.tree)?;
        self.touch();
        Ok(())
    }

    /// Group the mutations applied until `end_batch` into one undo step.
    pub fn begin_batch(&mut self) {
        self.history.begin_batch();
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    /// Undo the last edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, ContentError> {
        let changed = self.history.undo(&mut self.tree)?;
        if changed {
            self.touch();
        }
        Ok(changed)
    }

    /// Redo the last undone edit. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> Result<bool, ContentError> {
        let changed = self.history.redo(&mut self.tree)?;
        if changed {
            self.touch();
        }
        Ok(changed)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The document body as an HTML fragment.
    pub fn as_html(&self) -> Result<String, ContentError> {
        Ok(render_html(&self.tree, self.tree.root())?)
    }

    /// The document body as a Markdown-hybrid fragment.
    pub fn as_markdown(&self) -> Result<String, ContentError> {
        Ok(render_markdown(&self.tree, self.tree.root())?)
    }

    /// The document as a standalone fixed-geometry HTML page.
    pub fn as_page(&self) -> Result<String, ContentError> {
        Ok(render_page(&self.tree)?)
    }

    /// The document's serialized form.
    pub fn to_doc(&self) -> Result<NodeDoc, ContentError> {
        Ok(self.tree.to_doc()?)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumark_document::{NodeDoc, NodeKind};

    #[test]
    fn new_resume_starts_clean_on_the_template() {
        let resume = ResumeContent::new("resume_0");
        assert_eq!(resume.id(), "resume_0");
        assert_eq!(resume.version(), 0);
        assert!(!resume.is_dirty());
        assert!(resume.as_html().unwrap().contains("[Your Name]"));
    }

    #[test]
    fn edits_bump_version_and_dirty() {
        let mut tree = ContentTree::default();
        let line = tree.alloc(NodeKind::text_line());
        tree.insert(tree.root(), line, None).unwrap();
        let mut resume = ResumeContent::from_tree("r", tree);

        let mutation = Mutation::InsertNode {
            parent: line,
            index: None,
            node: NodeDoc::TextElement {
                status: 1,
                label: None,
                value: "hello".to_string(),
            },
        };
        resume.apply(&mutation).unwrap();
        assert_eq!(resume.version(), 1);
        assert!(resume.is_dirty());
        assert_eq!(resume.as_html().unwrap(), "hello");

        assert!(resume.undo().unwrap());
        assert_eq!(resume.version(), 2);
        assert_eq!(resume.as_html().unwrap(), "");

        assert!(resume.redo().unwrap());
        assert_eq!(resume.as_html().unwrap(), "hello");
        assert!(!resume.can_redo());
    }

    #[test]
    fn page_wraps_the_html_body() {
        let resume = ResumeContent::new("r");
        let page = resume.as_page().unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("[Your Name]"));
    }
}

//! JSON persistence for résumé documents.
//!
//! One file per résumé id under a root directory. Loading an id with no
//! saved file yields the default template instead of an error, so a fresh
//! profile is always editable.

use std::fs;
use std::path::{Path, PathBuf};

use resumark_document::{ContentTree, NodeDoc};

use crate::error::ContentError;
use crate::ResumeContent;

/// Directory-backed store of serialized résumés.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    root: PathBuf,
}

impl ResumeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file a given résumé id persists to.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    /// Load a résumé, falling back to the template when nothing is saved.
    pub fn load(&self, id: &str) -> Result<ResumeContent, ContentError> {
        let path = self.path_for(id);
        if !path.exists() {
            tracing::info!(id, "no saved resume, starting from the template");
            return Ok(ResumeContent::new(id));
        }
        let json = fs::read_to_string(&path)?;
        let doc = NodeDoc::from_json(&json)?;
        Ok(ResumeContent::from_tree(id, ContentTree::from_doc(&doc)))
    }

    /// Write a résumé as pretty-printed JSON, creating the directory if
    /// needed, and clear its dirty flag.
    pub fn save(&self, resume: &mut ResumeContent) -> Result<(), ContentError> {
        let path = self.path_for(resume.id());
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, resume.to_doc()?.to_json_pretty()?)?;
        resume.mark_clean();
        tracing::debug!(id = resume.id(), path = %path.display(), "saved resume");
        Ok(())
    }
}

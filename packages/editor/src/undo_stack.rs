//! # Undo/Redo Stack
//!
//! Tracks mutation history over a content tree.
//!
//! ## Design
//!
//! - Each mutation records its inverse before being applied
//! - Undo applies the inverses and moves the batch to the redo stack
//! - Redo reapplies the original mutations
//! - New mutations clear the redo stack
//! - Batches group multiple mutations into one undo step

use resumark_document::ContentTree;

use crate::mutations::{Mutation, MutationError};

/// A group of mutations undone and redone together.
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in application order.
    pub mutations: Vec<Mutation>,

    /// The inverse mutations, in reverse order for undo.
    pub inverses: Vec<Mutation>,

    /// Optional description shown in the editor's undo menu.
    pub description: Option<String>,
}

impl MutationBatch {
    pub fn single(mutation: Mutation, inverse: Mutation) -> Self {
        Self {
            mutations: vec![mutation],
            inverses: vec![inverse],
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo/redo stack for tree editing.
#[derive(Debug)]
pub struct UndoStack {
    /// Applied batches, most recent last.
    undo_stack: Vec<MutationBatch>,

    /// Undone batches, most recent last.
    redo_stack: Vec<MutationBatch>,

    /// Maximum undo levels (0 = unlimited).
    max_levels: usize,

    /// Batch currently being built, if any.
    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    /// Default history depth is 100 levels.
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo.
    pub fn apply(
        &mut self,
        mutation: &Mutation,
        tree: &mut ContentTree,
    ) -> Result<(), MutationError> {
        // The inverse must be captured against the pre-mutation tree.
        let inverse = mutation.to_inverse(tree)?;
        mutation.apply(tree)?;

        if let Some(batch) = &mut self.current_batch {
            batch.mutations.push(mutation.clone());
            batch.inverses.insert(0, inverse);
        } else {
            self.push_batch(MutationBatch::single(mutation.clone(), inverse));
        }
        Ok(())
    }

    /// Start grouping mutations into one undo step.
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(MutationBatch {
            mutations: Vec::new(),
            inverses: Vec::new(),
            description: None,
        });
    }

    /// Close the current batch and push it onto the undo stack.
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }
        // A new action invalidates the redo future.
        self.redo_stack.clear();
    }

    /// Undo the most recent batch. Returns false if there is nothing to undo.
    pub fn undo(&mut self, tree: &mut ContentTree) -> Result<bool, MutationError> {
        if let Some(batch) = self.undo_stack.pop() {
            for inverse in &batch.inverses {
                inverse.apply(tree)?;
            }
            self.redo_stack.push(batch);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Redo the most recently undone batch. Returns false if there is
    /// nothing to redo.
    pub fn redo(&mut self, tree: &mut ContentTree) -> Result<bool, MutationError> {
        if let Some(batch) = self.redo_stack.pop() {
            for mutation in &batch.mutations {
                mutation.apply(tree)?;
            }
            self.undo_stack.push(batch);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

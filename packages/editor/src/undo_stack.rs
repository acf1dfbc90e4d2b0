//! # Undo/Redo Stack
//!
//! Tracks editing history as whole state snapshots.
//!
//! ## Design
//!
//! - The reducer already produces immutable snapshots, so history keeps
//!   the prior snapshot instead of inverse operations
//! - Undo swaps the current snapshot for the recorded one and moves the
//!   current one to the redo stack
//! - New edits clear the redo stack
//! - Batched edits record one history entry for the whole group

use studio_document::EditorState;

#[derive(Debug, Clone)]
struct HistoryEntry {
    state: EditorState,
    description: Option<String>,
}

/// Undo/redo stack over editor state snapshots
#[derive(Debug)]
pub struct UndoStack {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// While batching, only the first recorded snapshot is kept
    batching: bool,
    batch_recorded: bool,
    batch_description: Option<String>,
}

impl UndoStack {
    /// Default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            batching: false,
            batch_recorded: false,
            batch_description: None,
        }
    }

    /// Record the snapshot that preceded an applied intent
    pub fn record(&mut self, prior: EditorState) {
        if self.batching {
            if self.batch_recorded {
                return;
            }
            self.batch_recorded = true;
            self.push_entry(HistoryEntry {
                state: prior,
                description: self.batch_description.clone(),
            });
            return;
        }

        self.push_entry(HistoryEntry {
            state: prior,
            description: None,
        });
    }

    /// Group subsequent edits into one undo step
    pub fn begin_batch(&mut self, description: Option<String>) {
        self.batching = true;
        self.batch_recorded = false;
        self.batch_description = description;
    }

    pub fn end_batch(&mut self) {
        self.batching = false;
        self.batch_recorded = false;
        self.batch_description = None;
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates the future
        self.redo_stack.clear();
    }

    /// Undo: returns the snapshot to restore, parking `current` for redo
    pub fn undo(&mut self, current: EditorState) -> Option<EditorState> {
        let entry = self.undo_stack.pop()?;

        self.redo_stack.push(HistoryEntry {
            state: current,
            description: entry.description.clone(),
        });

        Some(entry.state)
    }

    /// Redo: returns the snapshot to restore, parking `current` for undo
    pub fn redo(&mut self, current: EditorState) -> Option<EditorState> {
        let entry = self.redo_stack.pop()?;

        self.undo_stack.push(HistoryEntry {
            state: current,
            description: entry.description.clone(),
        });

        Some(entry.state)
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

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().and_then(|e| e.description.as_deref())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.batching = false;
        self.batch_recorded = false;
        self.batch_description = None;
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intents::Intent;
    use crate::reducer::reduce;
    use studio_document::ViewMode;

    #[test]
    fn test_empty_stack() {
        let stack = UndoStack::new();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_undo_restores_prior_snapshot() {
        let state = EditorState::new("test-doc");
        let mut stack = UndoStack::new();

        let next = reduce(
            &state,
            &Intent::SetCurrentView {
                view: ViewMode::Flow,
            },
        )
        .unwrap();
        stack.record(state.clone());

        let restored = stack.undo(next.clone()).unwrap();
        assert_eq!(restored, state);
        assert!(stack.can_redo());

        let redone = stack.redo(restored).unwrap();
        assert_eq!(redone, next);
        assert!(stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_new_record_clears_redo() {
        let state = EditorState::new("test-doc");
        let mut stack = UndoStack::new();

        stack.record(state.clone());
        let _ = stack.undo(state.clone()).unwrap();
        assert_eq!(stack.redo_levels(), 1);

        stack.record(state);
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let state = EditorState::new("test-doc");
        let mut stack = UndoStack::with_max_levels(2);

        for _ in 0..3 {
            stack.record(state.clone());
        }

        assert_eq!(stack.undo_levels(), 2);
    }

    #[test]
    fn test_batched_edits_form_one_undo_step() {
        let state = EditorState::new("test-doc");
        let mut stack = UndoStack::new();

        stack.begin_batch(Some("Restyle hero".to_string()));
        stack.record(state.clone());
        stack.record(state.clone());
        stack.record(state);
        stack.end_batch();

        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.undo_description(), Some("Restyle hero"));
    }
}

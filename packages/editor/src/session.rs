//! # Edit Session
//!
//! One editing session owns one `EditorState`. The hosting session
//! controller (persistence, multi-user sync) hands intents to
//! `dispatch` and reads the current snapshot back; nothing else writes
//! the state.

use crate::intents::{Intent, IntentError};
use crate::reducer::reduce;
use crate::undo_stack::UndoStack;
use studio_document::EditorState;
use tracing::debug;

/// Result of dispatching one intent. A rejected intent is a no-op plus
/// a reason code.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub applied: bool,

    /// Version after the dispatch (unchanged on rejection)
    pub version: u64,

    pub reason: Option<IntentError>,
}

/// Single editing session over one document
pub struct EditSession {
    /// Session identifier
    pub id: String,

    state: EditorState,

    /// Currently selected node ids (canvas selection)
    pub selected_nodes: Vec<String>,

    undo: UndoStack,
}

impl EditSession {
    pub fn new(id: impl Into<String>, state: EditorState) -> Self {
        Self {
            id: id.into(),
            state,
            selected_nodes: Vec::new(),
            undo: UndoStack::new(),
        }
    }

    /// Current snapshot. Read-only by contract: mutation goes through
    /// `dispatch`.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Apply an intent through the reducer
    pub fn dispatch(&mut self, intent: &Intent) -> DispatchOutcome {
        match reduce(&self.state, intent) {
            Ok(next) => {
                self.undo.record(std::mem::replace(&mut self.state, next));
                self.prune_selection();

                DispatchOutcome {
                    applied: true,
                    version: self.state.version,
                    reason: None,
                }
            }
            Err(reason) => {
                debug!(session = %self.id, %reason, "intent rejected");
                DispatchOutcome {
                    applied: false,
                    version: self.state.version,
                    reason: Some(reason),
                }
            }
        }
    }

    /// Group subsequent dispatches into one undo step
    pub fn begin_batch(&mut self, description: Option<String>) {
        self.undo.begin_batch(description);
    }

    pub fn end_batch(&mut self) {
        self.undo.end_batch();
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        let current = self.state.clone();
        match self.undo.undo(current) {
            Some(restored) => {
                self.state = restored;
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.state.clone();
        match self.undo.redo(current) {
            Some(restored) => {
                self.state = restored;
                self.prune_selection();
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, node_ids: Vec<String>) {
        self.selected_nodes = node_ids;
        self.prune_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selected_nodes.clear();
    }

    /// Selection may only reference nodes that still exist
    fn prune_selection(&mut self) {
        let document = &self.state.document;
        self.selected_nodes.retain(|id| document.contains(id));
    }
}

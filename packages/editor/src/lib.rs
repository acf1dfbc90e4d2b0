//! # Studio Editor
//!
//! Document state engine for the visual editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: element tree + tokens + variables │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: intents + reducer + sessions        │
//! │  - Validate intents against the snapshot    │
//! │  - Produce fresh immutable snapshots        │
//! │  - Snapshot-based undo/redo                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ elements/shell: snapshot → rendered views   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Single writer**: only the reducer produces new states
//! 2. **Snapshots are immutable**: readers never observe a half-updated
//!    tree
//! 3. **Rejection is a no-op**: failed intents change nothing and carry
//!    a reason code
//!
//! ## Usage
//!
//! ```rust
//! use studio_document::{EditorState, ElementProps, ViewMode};
//! use studio_editor::{EditSession, Intent};
//!
//! let mut session = EditSession::new("session-1", EditorState::new("landing-page"));
//! let root_id = session.state().document.id.clone();
//!
//! let outcome = session.dispatch(&Intent::InsertElement {
//!     parent_id: root_id,
//!     index: 0,
//!     name: Some("Hero".to_string()),
//!     props: ElementProps::Section,
//!     styles: Default::default(),
//! });
//! assert!(outcome.applied);
//!
//! session.dispatch(&Intent::SetCurrentView { view: ViewMode::Flow });
//! assert!(session.undo());
//! ```

mod intents;
mod reducer;
mod session;
mod undo_stack;

pub use intents::{Intent, IntentError, StyleLayer, TokenGroupKind};
pub use reducer::reduce;
pub use session::{DispatchOutcome, EditSession};
pub use undo_stack::UndoStack;

// Re-export the state type for convenience
pub use studio_document::EditorState;

//! Editor document state: the aggregate the whole editor reads.
//!
//! One `EditorState` is owned by one editing session. Consumers receive
//! it by reference and never mutate it directly; mutation happens only
//! through the editor's reducer, which produces fresh snapshots. The
//! `version` counter increments once per applied intent.

use crate::design_system::DesignSystem;
use crate::element::{ElementNode, ElementProps};
use crate::id_generator::IdGenerator;
use crate::variables::VariableStore;
use serde::{Deserialize, Serialize};

/// The two mutually exclusive presentations of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Design,
    Flow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// Root of the element tree
    pub document: ElementNode,

    /// Ordered; the first entry is the active design system
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub design_systems: Vec<DesignSystem>,

    #[serde(default)]
    pub variables: VariableStore,

    pub current_view: ViewMode,

    /// Increments once per applied intent
    pub version: u64,

    /// Id allocator, carried in the state so ids stay unique across
    /// save/load cycles
    pub ids: IdGenerator,
}

impl EditorState {
    /// Fresh document: a single root Box
    pub fn new(document_name: &str) -> Self {
        let mut ids = IdGenerator::new(document_name);
        let root = ElementNode::new(ids.new_id(), ElementProps::Box);

        Self {
            document: root,
            design_systems: Vec::new(),
            variables: VariableStore::new(),
            current_view: ViewMode::default(),
            version: 0,
            ids,
        }
    }

    /// First design system in document order, if any
    pub fn active_design_system(&self) -> Option<&DesignSystem> {
        self.design_systems.first()
    }

    pub fn find_node(&self, id: &str) -> Option<&ElementNode> {
        self.document.find(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_root() {
        let state = EditorState::new("landing-page");
        assert_eq!(state.version, 0);
        assert_eq!(state.current_view, ViewMode::Design);
        assert_eq!(state.document.node_count(), 1);
        assert!(state.active_design_system().is_none());
    }

    #[test]
    fn test_first_design_system_is_active() {
        let mut state = EditorState::new("landing-page");
        state
            .design_systems
            .push(DesignSystem::new("ds-1", "Default"));
        state
            .design_systems
            .push(DesignSystem::new("ds-2", "Dark"));

        assert_eq!(state.active_design_system().unwrap().id, "ds-1");
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = EditorState::new("landing-page");
        let json = serde_json::to_string(&state).unwrap();
        let back: EditorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}

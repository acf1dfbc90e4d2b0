//! # Editor Intents
//!
//! Intent-preserving descriptions of desired state changes, dispatched
//! to the reducer.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each intent is a semantic operation, not a
//!    raw tree patch
//! 2. **Validated**: structural constraints are checked before any state
//!    is produced
//! 3. **Rejection is a no-op**: a failed intent leaves the state
//!    untouched and surfaces a reason code

use serde::{Deserialize, Serialize};
use studio_document::{
    EditorState, ElementProps, ElementStyles, StyleProperty, StyleValue, VariableValue, ViewMode,
};
use thiserror::Error;

/// Which style layer a single-property edit targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StyleLayer {
    Base,
    Variant { name: String },
    State { name: String },
}

/// Which token group a token edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenGroupKind {
    Colors,
    Typography,
    Spacing,
}

/// Desired state changes (serializable, like any other document payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Intent {
    /// Switch between the design and flow presentations
    SetCurrentView { view: ViewMode },

    /// Insert a new element under a container. The node id is allocated
    /// by the reducer, so replaying the same payload yields a distinct
    /// node every time.
    InsertElement {
        parent_id: String,
        index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        props: ElementProps,
        #[serde(default)]
        styles: ElementStyles,
    },

    /// Remove a node and all its descendants
    RemoveElement { node_id: String },

    /// Atomically relocate a node under a new parent at index
    MoveElement {
        node_id: String,
        new_parent_id: String,
        index: usize,
    },

    /// Replace a node's kind-specific properties (same kind only)
    UpdateProps {
        node_id: String,
        props: ElementProps,
    },

    /// Replace a node's full style definition
    UpdateStyle {
        node_id: String,
        styles: ElementStyles,
    },

    /// Set one style property on one layer
    SetStyleProperty {
        node_id: String,
        layer: StyleLayer,
        property: StyleProperty,
        value: StyleValue,
    },

    AddDesignSystem { name: String },

    RemoveDesignSystem { system_id: String },

    SetToken {
        system_id: String,
        group: TokenGroupKind,
        category: String,
        name: String,
        value: String,
    },

    /// Remove a token by its "Category/Name" reference. Style values
    /// still referencing it resolve through the fallback path.
    RemoveToken {
        system_id: String,
        reference: String,
    },

    AddVariable { name: String, value: VariableValue },

    UpdateVariable { name: String, value: VariableValue },

    /// Remove a variable. Dangling style references resolve through the
    /// fallback path.
    RemoveVariable { name: String },
}

/// Reason codes for rejected intents
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntentError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("parent not found: {0}")]
    ParentNotFound(String),

    #[error("element {0} cannot have children")]
    NotAContainer(String),

    #[error("move would create a cycle")]
    CycleDetected,

    #[error("the root element cannot be removed or moved")]
    RootImmutable,

    #[error("props kind does not match element {0}")]
    KindMismatch(String),

    #[error("design system not found: {0}")]
    DesignSystemNotFound(String),

    #[error("token not found: {0}")]
    TokenNotFound(String),

    #[error("variable not found: {0}")]
    VariableNotFound(String),

    #[error("variable name already taken: {0}")]
    NameTaken(String),
}

impl Intent {
    /// Validate against the current state without applying
    pub fn validate(&self, state: &EditorState) -> Result<(), IntentError> {
        match self {
            // Total over the two view modes
            Intent::SetCurrentView { .. } => Ok(()),

            Intent::InsertElement { parent_id, .. } => {
                let parent = state
                    .find_node(parent_id)
                    .ok_or_else(|| IntentError::ParentNotFound(parent_id.clone()))?;

                if !parent.is_container() {
                    return Err(IntentError::NotAContainer(parent_id.clone()));
                }

                Ok(())
            }

            Intent::RemoveElement { node_id } => {
                if state.document.id == *node_id {
                    return Err(IntentError::RootImmutable);
                }

                state
                    .find_node(node_id)
                    .ok_or_else(|| IntentError::NodeNotFound(node_id.clone()))?;

                Ok(())
            }

            Intent::MoveElement {
                node_id,
                new_parent_id,
                ..
            } => {
                if state.document.id == *node_id {
                    return Err(IntentError::RootImmutable);
                }

                let node = state
                    .find_node(node_id)
                    .ok_or_else(|| IntentError::NodeNotFound(node_id.clone()))?;

                // Reparenting into the moved subtree (itself included)
                // would break the tree invariant
                if node.contains(new_parent_id) {
                    return Err(IntentError::CycleDetected);
                }

                let parent = state
                    .find_node(new_parent_id)
                    .ok_or_else(|| IntentError::ParentNotFound(new_parent_id.clone()))?;

                if !parent.is_container() {
                    return Err(IntentError::NotAContainer(new_parent_id.clone()));
                }

                Ok(())
            }

            Intent::UpdateProps { node_id, props } => {
                let node = state
                    .find_node(node_id)
                    .ok_or_else(|| IntentError::NodeNotFound(node_id.clone()))?;

                if node.kind() != props.kind() {
                    return Err(IntentError::KindMismatch(node_id.clone()));
                }

                Ok(())
            }

            Intent::UpdateStyle { node_id, .. } | Intent::SetStyleProperty { node_id, .. } => {
                state
                    .find_node(node_id)
                    .ok_or_else(|| IntentError::NodeNotFound(node_id.clone()))?;
                Ok(())
            }

            Intent::AddDesignSystem { .. } => Ok(()),

            Intent::RemoveDesignSystem { system_id } | Intent::SetToken { system_id, .. } => {
                state
                    .design_systems
                    .iter()
                    .find(|ds| ds.id == *system_id)
                    .ok_or_else(|| IntentError::DesignSystemNotFound(system_id.clone()))?;
                Ok(())
            }

            Intent::RemoveToken {
                system_id,
                reference,
            } => {
                let system = state
                    .design_systems
                    .iter()
                    .find(|ds| ds.id == *system_id)
                    .ok_or_else(|| IntentError::DesignSystemNotFound(system_id.clone()))?;

                if !system.has_token(reference) {
                    return Err(IntentError::TokenNotFound(reference.clone()));
                }

                Ok(())
            }

            Intent::AddVariable { name, .. } => {
                if state.variables.contains_name(name) {
                    return Err(IntentError::NameTaken(name.clone()));
                }
                Ok(())
            }

            Intent::UpdateVariable { name, .. } | Intent::RemoveVariable { name } => {
                if !state.variables.contains_name(name) {
                    return Err(IntentError::VariableNotFound(name.clone()));
                }
                Ok(())
            }
        }
    }
}

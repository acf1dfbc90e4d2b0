//! The reducer: pure state transitions over `EditorState`.
//!
//! `reduce` never mutates its input. It validates the intent against the
//! current snapshot, clones the snapshot, applies the change to the
//! clone, bumps the version and returns it. Concurrent readers of the
//! old snapshot never observe a half-updated tree, and undo can keep
//! whole snapshots.

use crate::intents::{Intent, IntentError, StyleLayer, TokenGroupKind};
use studio_document::{EditorState, ElementNode, StyleIntent, Variable};
use tracing::debug;

/// Apply an intent, producing the next state snapshot.
///
/// On rejection the error carries the reason code and the caller keeps
/// the untouched input state.
pub fn reduce(state: &EditorState, intent: &Intent) -> Result<EditorState, IntentError> {
    intent.validate(state)?;

    let mut next = state.clone();

    match intent {
        Intent::SetCurrentView { view } => {
            next.current_view = *view;
        }

        Intent::InsertElement {
            parent_id,
            index,
            name,
            props,
            styles,
        } => {
            let id = next.ids.new_id();
            debug!(%parent_id, node_id = %id, "inserting element");

            let mut node = ElementNode::new(id, props.clone()).with_styles(styles.clone());
            node.name = name.clone();

            // Parent presence checked by validate
            if let Some(parent) = next.document.find_mut(parent_id) {
                let insert_index = (*index).min(parent.children.len());
                parent.children.insert(insert_index, node);
            }
        }

        Intent::RemoveElement { node_id } => {
            next.document.remove_descendant(node_id);
        }

        Intent::MoveElement {
            node_id,
            new_parent_id,
            index,
        } => {
            // Validate guarantees the node exists, is not the root, and
            // the target parent is a container outside the moved subtree
            if let Some(node) = next.document.remove_descendant(node_id) {
                if let Some(parent) = next.document.find_mut(new_parent_id) {
                    let insert_index = (*index).min(parent.children.len());
                    parent.children.insert(insert_index, node);
                }
            }
        }

        Intent::UpdateProps { node_id, props } => {
            if let Some(node) = next.document.find_mut(node_id) {
                node.props = props.clone();
            }
        }

        Intent::UpdateStyle { node_id, styles } => {
            if let Some(node) = next.document.find_mut(node_id) {
                node.styles = styles.clone();
            }
        }

        Intent::SetStyleProperty {
            node_id,
            layer,
            property,
            value,
        } => {
            if let Some(node) = next.document.find_mut(node_id) {
                let intent_for_layer = match layer {
                    StyleLayer::Base => &mut node.styles.base,
                    StyleLayer::Variant { name } => node
                        .styles
                        .variants
                        .entry(name.clone())
                        .or_insert_with(StyleIntent::new),
                    StyleLayer::State { name } => node
                        .styles
                        .states
                        .entry(name.clone())
                        .or_insert_with(StyleIntent::new),
                };
                intent_for_layer.set(*property, value.clone());
            }
        }

        Intent::AddDesignSystem { name } => {
            let id = next.ids.new_id();
            next.design_systems
                .push(studio_document::DesignSystem::new(id, name.clone()));
        }

        Intent::RemoveDesignSystem { system_id } => {
            next.design_systems.retain(|ds| ds.id != *system_id);
        }

        Intent::SetToken {
            system_id,
            group,
            category,
            name,
            value,
        } => {
            if let Some(system) = next.design_systems.iter_mut().find(|ds| ds.id == *system_id)
            {
                match group {
                    TokenGroupKind::Colors => {
                        system.set_color(category.clone(), name.clone(), value.clone())
                    }
                    TokenGroupKind::Typography => {
                        system.set_typography(category.clone(), name.clone(), value.clone())
                    }
                    TokenGroupKind::Spacing => {
                        system.set_spacing(category.clone(), name.clone(), value.clone())
                    }
                }
            }
        }

        Intent::RemoveToken {
            system_id,
            reference,
        } => {
            if let Some(system) = next.design_systems.iter_mut().find(|ds| ds.id == *system_id)
            {
                system.remove_token(reference);
            }
        }

        Intent::AddVariable { name, value } => {
            let id = next.ids.new_id();
            next.variables.insert(Variable {
                id,
                name: name.clone(),
                value: value.clone(),
            });
        }

        Intent::UpdateVariable { name, value } => {
            if let Some(variable) = next.variables.get_mut(name) {
                variable.value = value.clone();
            }
        }

        Intent::RemoveVariable { name } => {
            next.variables.remove(name);
        }
    }

    next.version += 1;
    Ok(next)
}

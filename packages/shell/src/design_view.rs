//! Design view: the canvas render plus the properties panel projection
//! for the selected node.

use serde::{Deserialize, Serialize};
use studio_document::{EditorState, ElementNode};
use studio_elements::{render_node, RenderContext, RenderError, VNode};
use studio_resolver::{color_sources, resolve, try_resolve_value, ColorSource};

/// One resolved style row in the properties panel. `reference` keeps
/// the token/variable name for display ("Primary/500", not "#3b82f6").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleField {
    pub property: String,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Properties panel model for the selected node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertiesPanel {
    pub node_id: String,
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub fields: Vec<StyleField>,

    /// The three interchangeable origins a color picker presents
    pub color_sources: Vec<ColorSource>,
}

/// Canvas plus properties panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFrame {
    pub canvas: VNode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertiesPanel>,
}

pub fn render_design(
    state: &EditorState,
    selected_node: Option<&str>,
) -> Result<DesignFrame, RenderError> {
    let ctx = RenderContext::from_state(state);
    let canvas = render_node(&state.document, &ctx)?;

    let properties = selected_node
        .and_then(|id| state.find_node(id))
        .map(|node| properties_panel(state, node));

    Ok(DesignFrame { canvas, properties })
}

fn properties_panel(state: &EditorState, node: &ElementNode) -> PropertiesPanel {
    let system = state.active_design_system();
    let resolved = resolve(&node.styles, None, None);

    // Dangling references are editable too: show the reference name with
    // an empty value instead of dropping the row
    let fields = resolved
        .iter()
        .map(|(property, value)| {
            match try_resolve_value(value, system, &state.variables) {
                Ok(concrete) => StyleField {
                    property: property.css_name().to_string(),
                    value: concrete.value,
                    reference: concrete.reference,
                },
                Err(dangling) => StyleField {
                    property: property.css_name().to_string(),
                    value: String::new(),
                    reference: Some(dangling.name),
                },
            }
        })
        .collect();

    PropertiesPanel {
        node_id: node.id.clone(),
        kind: node.kind().label().to_string(),
        name: node.name.clone(),
        fields,
        color_sources: color_sources(system, &state.variables),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_document::{
        ElementProps, ElementStyles, StyleIntent, StyleProperty, StyleValue,
    };
    use studio_editor::{reduce, Intent, TokenGroupKind};

    fn seeded_state() -> EditorState {
        let state = EditorState::new("test-doc");
        let root_id = state.document.id.clone();

        let state = reduce(
            &state,
            &Intent::AddDesignSystem {
                name: "Default".to_string(),
            },
        )
        .unwrap();
        let system_id = state.design_systems[0].id.clone();

        let state = reduce(
            &state,
            &Intent::SetToken {
                system_id,
                group: TokenGroupKind::Colors,
                category: "Primary".to_string(),
                name: "500".to_string(),
                value: "#3b82f6".to_string(),
            },
        )
        .unwrap();

        reduce(
            &state,
            &Intent::InsertElement {
                parent_id: root_id,
                index: 0,
                name: Some("Hero".to_string()),
                props: ElementProps::Section,
                styles: ElementStyles::with_base(
                    StyleIntent::new()
                        .with(StyleProperty::Background, StyleValue::token("Primary/500")),
                ),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_design_frame_without_selection_has_no_panel() {
        let state = seeded_state();
        let frame = render_design(&state, None).unwrap();

        assert!(frame.properties.is_none());
        assert_eq!(frame.canvas.children().unwrap().len(), 1);
    }

    #[test]
    fn test_panel_shows_reference_names() {
        let state = seeded_state();
        let section_id = state.document.children[0].id.clone();

        let frame = render_design(&state, Some(&section_id)).unwrap();
        let panel = frame.properties.unwrap();

        assert_eq!(panel.kind, "Section");
        assert_eq!(panel.name.as_deref(), Some("Hero"));

        let background = panel
            .fields
            .iter()
            .find(|f| f.property == "background")
            .unwrap();
        assert_eq!(background.value, "#3b82f6");
        assert_eq!(background.reference.as_deref(), Some("Primary/500"));

        // Picker offers the freeform origin plus the token
        assert!(panel
            .color_sources
            .iter()
            .any(|s| matches!(s, ColorSource::Custom)));
        assert!(panel
            .color_sources
            .iter()
            .any(|s| matches!(s, ColorSource::Token { name, .. } if name == "500")));
    }

    #[test]
    fn test_selecting_unknown_node_yields_no_panel() {
        let state = seeded_state();
        let frame = render_design(&state, Some("missing")).unwrap();
        assert!(frame.properties.is_none());
    }
}

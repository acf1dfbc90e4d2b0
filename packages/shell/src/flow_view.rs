//! Flow view: project the element tree onto a node graph. One graph
//! node per element, one edge per parent→child link, with a simple
//! depth/row layout.

use serde::{Deserialize, Serialize};
use studio_document::{EditorState, ElementNode};

const COLUMN_WIDTH: f64 = 240.0;
const ROW_HEIGHT: f64 = 120.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowFrame {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

pub fn render_flow(state: &EditorState) -> FlowFrame {
    let mut frame = FlowFrame {
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    let mut row = 0usize;

    walk(&state.document, 0, &mut row, &mut frame);
    frame
}

fn walk(node: &ElementNode, depth: usize, row: &mut usize, frame: &mut FlowFrame) {
    frame.nodes.push(FlowNode {
        id: node.id.clone(),
        label: node.kind().label().to_string(),
        name: node.name.clone(),
        x: depth as f64 * COLUMN_WIDTH,
        y: *row as f64 * ROW_HEIGHT,
    });
    *row += 1;

    for child in &node.children {
        frame.edges.push(FlowEdge {
            from: node.id.clone(),
            to: child.id.clone(),
        });
        walk(child, depth + 1, row, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_document::ElementProps;
    use studio_editor::{reduce, Intent};

    #[test]
    fn test_flow_projection_covers_every_node_and_link() {
        let state = EditorState::new("test-doc");
        let root_id = state.document.id.clone();

        let state = reduce(
            &state,
            &Intent::InsertElement {
                parent_id: root_id.clone(),
                index: 0,
                name: Some("Hero".to_string()),
                props: ElementProps::Section,
                styles: Default::default(),
            },
        )
        .unwrap();
        let section_id = state.document.children[0].id.clone();

        let state = reduce(
            &state,
            &Intent::InsertElement {
                parent_id: section_id.clone(),
                index: 0,
                name: None,
                props: ElementProps::Text {
                    content: "Welcome".to_string(),
                },
                styles: Default::default(),
            },
        )
        .unwrap();

        let frame = render_flow(&state);

        assert_eq!(frame.nodes.len(), 3);
        assert_eq!(frame.edges.len(), 2);

        // Depth drives the column position
        let section = frame.nodes.iter().find(|n| n.id == section_id).unwrap();
        assert_eq!(section.x, COLUMN_WIDTH);
        assert_eq!(section.label, "Section");

        assert!(frame
            .edges
            .iter()
            .any(|e| e.from == root_id && e.to == section_id));
    }

    #[test]
    fn test_rows_are_unique() {
        let state = EditorState::new("test-doc");
        let frame = render_flow(&state);
        assert_eq!(frame.nodes.len(), 1);
        assert_eq!(frame.nodes[0].y, 0.0);
    }
}

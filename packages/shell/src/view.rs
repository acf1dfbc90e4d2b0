//! View dispatch: one of the two mutually exclusive presentations of
//! the same document, selected by `EditorState::current_view`.

use crate::design_view::{render_design, DesignFrame};
use crate::flow_view::{render_flow, FlowFrame};
use serde::{Deserialize, Serialize};
use studio_document::{EditorState, ViewMode};
use studio_elements::RenderError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_node: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewFrame {
    Design(DesignFrame),
    Flow(FlowFrame),
}

/// Render the active presentation. Total over the two view modes.
pub fn render_view(state: &EditorState, options: &ViewOptions) -> Result<ViewFrame, RenderError> {
    match state.current_view {
        ViewMode::Design => Ok(ViewFrame::Design(render_design(
            state,
            options.selected_node.as_deref(),
        )?)),
        ViewMode::Flow => Ok(ViewFrame::Flow(render_flow(state))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_editor::{reduce, Intent};

    #[test]
    fn test_dispatch_follows_current_view() {
        let state = EditorState::new("test-doc");
        let options = ViewOptions::default();

        let frame = render_view(&state, &options).unwrap();
        assert!(matches!(frame, ViewFrame::Design(_)));

        let flow_state = reduce(
            &state,
            &Intent::SetCurrentView {
                view: ViewMode::Flow,
            },
        )
        .unwrap();
        let frame = render_view(&flow_state, &options).unwrap();
        assert!(matches!(frame, ViewFrame::Flow(_)));
    }
}

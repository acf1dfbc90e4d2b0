//! # Studio Shell
//!
//! The view shell composes the document state, resolver and element
//! library into the two interchangeable presentations: a canvas +
//! properties design view and a node-graph flow view. The shell is a
//! consumer of `EditorState`, never an owner of editing logic.

pub mod design_view;
pub mod flow_view;
pub mod view;

pub use design_view::{render_design, DesignFrame, PropertiesPanel, StyleField};
pub use flow_view::{render_flow, FlowEdge, FlowFrame, FlowNode};
pub use view::{render_view, ViewFrame, ViewOptions};

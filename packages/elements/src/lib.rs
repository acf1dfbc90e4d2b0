//! # Studio Elements
//!
//! The element component library: every element kind renders through a
//! single dispatch to host `VNode`s, carrying its own default visual
//! mapping. Transient interaction state for stateful kinds (Carousel,
//! Modal, Tabs) lives here too, outside the editor document state.

pub mod interaction;
pub mod render;
pub mod vdom;

pub use interaction::{
    CarouselState, HostChrome, Key, ModalState, TabsState, TimerId, Timers,
};
pub use render::{render_node, RenderContext, RenderError};
pub use vdom::VNode;

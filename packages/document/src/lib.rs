//! # Studio Document
//!
//! Data model for the visual editor: the element tree, style intents,
//! design-system tokens, document variables, and the aggregate
//! `EditorState`.
//!
//! This crate is purely structural. Style resolution lives in
//! `studio-resolver`, rendering in `studio-elements`, and all mutation
//! in `studio-editor`'s reducer.

pub mod design_system;
pub mod element;
pub mod id_generator;
pub mod state;
pub mod style;
pub mod variables;

pub use design_system::{DesignSystem, TokenGroup};
pub use element::{
    ButtonSize, ButtonVariant, CarouselItem, ContainerWidth, ElementKind, ElementNode,
    ElementProps, SelectOption, StackDirection,
};
pub use id_generator::{document_seed, IdGenerator};
pub use state::{EditorState, ViewMode};
pub use style::{ElementStyles, StyleIntent, StyleProperty, StyleValue};
pub use variables::{is_hex_color, Variable, VariableStore, VariableValue};

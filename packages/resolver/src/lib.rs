//! # Studio Resolver
//!
//! Pure style resolution for the visual editor:
//!
//! - `style_resolver::resolve` flattens base/variant/state overlays
//! - `reference` resolves token and variable references with a
//!   fallback-on-dangling policy that keeps errors out of the render
//!   path
//! - `reference::color_sources` enumerates the three interchangeable
//!   picker origins for a color value

pub mod reference;
pub mod style_resolver;

pub use reference::{
    color_sources, resolve_intent, resolve_value, try_resolve_value, ColorSource,
    DanglingReference, ResolvedValue,
};
pub use style_resolver::{resolve, to_render_props};

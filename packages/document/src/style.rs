//! Style intents: sparse, reference-capable style records.
//!
//! A `StyleIntent` never cascades. Unset properties inherit host-UI
//! defaults, and the only indirection allowed is an explicit token or
//! variable reference carried by a `StyleValue`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recognized style properties (closed set)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    // Layout
    Display,
    Position,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,

    // Flex / grid
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    Gap,
    GridTemplateColumns,
    GridTemplateRows,

    // Dimensions
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,

    // Spacing
    Margin,
    Padding,

    // Visual
    Background,
    Color,
    Border,
    BorderRadius,
    BoxShadow,
    Opacity,

    // Text
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    TextAlign,

    // Transform / transition
    Transform,
    Transition,

    // Misc
    Overflow,
    Cursor,
}

impl StyleProperty {
    /// Host (CSS) property name
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Display => "display",
            StyleProperty::Position => "position",
            StyleProperty::Top => "top",
            StyleProperty::Right => "right",
            StyleProperty::Bottom => "bottom",
            StyleProperty::Left => "left",
            StyleProperty::ZIndex => "z-index",
            StyleProperty::FlexDirection => "flex-direction",
            StyleProperty::FlexWrap => "flex-wrap",
            StyleProperty::JustifyContent => "justify-content",
            StyleProperty::AlignItems => "align-items",
            StyleProperty::Gap => "gap",
            StyleProperty::GridTemplateColumns => "grid-template-columns",
            StyleProperty::GridTemplateRows => "grid-template-rows",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::MinWidth => "min-width",
            StyleProperty::MaxWidth => "max-width",
            StyleProperty::MinHeight => "min-height",
            StyleProperty::MaxHeight => "max-height",
            StyleProperty::Margin => "margin",
            StyleProperty::Padding => "padding",
            StyleProperty::Background => "background",
            StyleProperty::Color => "color",
            StyleProperty::Border => "border",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::BoxShadow => "box-shadow",
            StyleProperty::Opacity => "opacity",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::LineHeight => "line-height",
            StyleProperty::LetterSpacing => "letter-spacing",
            StyleProperty::TextAlign => "text-align",
            StyleProperty::Transform => "transform",
            StyleProperty::Transition => "transition",
            StyleProperty::Overflow => "overflow",
            StyleProperty::Cursor => "cursor",
        }
    }
}

/// A style value: literal, or a named reference into the design system
/// or variable store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StyleValue {
    /// Concrete value, e.g. "16px" or "#3b82f6"
    Literal { value: String },

    /// Design-system token reference, e.g. "Primary/500"
    Token { name: String },

    /// Document variable reference
    Variable { name: String },
}

impl StyleValue {
    pub fn literal(value: impl Into<String>) -> Self {
        StyleValue::Literal {
            value: value.into(),
        }
    }

    pub fn token(name: impl Into<String>) -> Self {
        StyleValue::Token { name: name.into() }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        StyleValue::Variable { name: name.into() }
    }

    /// Concrete value, if already literal
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            StyleValue::Literal { value } => Some(value),
            _ => None,
        }
    }

    /// Reference name, if this value is a token or variable reference
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            StyleValue::Token { name } | StyleValue::Variable { name } => Some(name),
            StyleValue::Literal { .. } => None,
        }
    }
}

/// Sparse style record: only explicitly set properties are present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleIntent {
    properties: BTreeMap<StyleProperty, StyleValue>,
}

impl StyleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: StyleProperty, value: StyleValue) {
        self.properties.insert(property, value);
    }

    pub fn with(mut self, property: StyleProperty, value: StyleValue) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.properties.get(&property)
    }

    pub fn remove(&mut self, property: StyleProperty) -> Option<StyleValue> {
        self.properties.remove(&property)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleProperty, &StyleValue)> {
        self.properties.iter()
    }

    /// Shallow per-property overlay: properties set in `overlay` replace
    /// the same property here; everything else is kept
    pub fn merge_from(&mut self, overlay: &StyleIntent) {
        for (property, value) in overlay.iter() {
            self.properties.insert(*property, value.clone());
        }
    }
}

/// Style definition of an element: base plus named variant and state
/// overlays. Resolution order is base, then variant, then state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStyles {
    pub base: StyleIntent,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<String, StyleIntent>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<String, StyleIntent>,
}

impl ElementStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: StyleIntent) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn variant(mut self, name: impl Into<String>, intent: StyleIntent) -> Self {
        self.variants.insert(name.into(), intent);
        self
    }

    pub fn state(mut self, name: impl Into<String>, intent: StyleIntent) -> Self {
        self.states.insert(name.into(), intent);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overlay_wins() {
        let mut base = StyleIntent::new()
            .with(StyleProperty::Color, StyleValue::literal("#000000"))
            .with(StyleProperty::Padding, StyleValue::literal("8px"));

        let overlay =
            StyleIntent::new().with(StyleProperty::Color, StyleValue::literal("#ffffff"));

        base.merge_from(&overlay);

        assert_eq!(
            base.get(StyleProperty::Color).unwrap().as_literal(),
            Some("#ffffff")
        );
        assert_eq!(
            base.get(StyleProperty::Padding).unwrap().as_literal(),
            Some("8px")
        );
    }

    #[test]
    fn test_reference_names() {
        let token = StyleValue::token("Primary/500");
        assert_eq!(token.reference_name(), Some("Primary/500"));
        assert_eq!(token.as_literal(), None);

        let literal = StyleValue::literal("#fff");
        assert_eq!(literal.reference_name(), None);
        assert_eq!(literal.as_literal(), Some("#fff"));
    }

    #[test]
    fn test_style_value_serialization() {
        let value = StyleValue::token("Primary/500");
        let json = serde_json::to_string(&value).unwrap();
        let back: StyleValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}

//! Style resolution: flatten an `ElementStyles` record into a single
//! render-ready intent.
//!
//! Resolution is a pure shallow merge: base, then the selected variant
//! overlay, then the selected state overlay, later layers winning per
//! property. Unknown variant or state names index an optional mapping
//! and are defined no-ops, not errors.

use std::collections::BTreeMap;
use studio_document::{ElementStyles, StyleIntent};

/// Merge base with the named variant and state overlays.
///
/// State wins over variant, variant wins over base, per property.
pub fn resolve(
    styles: &ElementStyles,
    variant: Option<&str>,
    state: Option<&str>,
) -> StyleIntent {
    let mut resolved = styles.base.clone();

    if let Some(name) = variant {
        if let Some(overlay) = styles.variants.get(name) {
            resolved.merge_from(overlay);
        }
    }

    if let Some(name) = state {
        if let Some(overlay) = styles.states.get(name) {
            resolved.merge_from(overlay);
        }
    }

    resolved
}

/// Flatten an intent into a host (CSS-shaped) property record.
///
/// Properties absent from the intent are omitted so host defaults
/// apply. Reference values must be resolved to literals first (see
/// `reference::resolve_intent`); any still-unresolved reference carries
/// no concrete value and is omitted as well.
pub fn to_render_props(intent: &StyleIntent) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();

    for (property, value) in intent.iter() {
        if let Some(literal) = value.as_literal() {
            props.insert(property.css_name().to_string(), literal.to_string());
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_document::{StyleProperty, StyleValue};

    fn sample_styles() -> ElementStyles {
        ElementStyles::with_base(
            StyleIntent::new()
                .with(StyleProperty::Color, StyleValue::literal("#0f172a"))
                .with(StyleProperty::Padding, StyleValue::literal("8px"))
                .with(StyleProperty::FontSize, StyleValue::literal("16px")),
        )
        .variant(
            "compact",
            StyleIntent::new()
                .with(StyleProperty::Padding, StyleValue::literal("4px"))
                .with(StyleProperty::FontSize, StyleValue::literal("14px")),
        )
        .state(
            "hover",
            StyleIntent::new().with(StyleProperty::Padding, StyleValue::literal("6px")),
        )
    }

    #[test]
    fn test_resolve_without_overlays_is_base() {
        let styles = sample_styles();
        assert_eq!(resolve(&styles, None, None), styles.base);
    }

    #[test]
    fn test_state_wins_over_variant_wins_over_base() {
        let styles = sample_styles();
        let resolved = resolve(&styles, Some("compact"), Some("hover"));

        // State overlay wins on padding
        assert_eq!(
            resolved.get(StyleProperty::Padding).unwrap().as_literal(),
            Some("6px")
        );
        // Variant overlay wins on font size (state does not set it)
        assert_eq!(
            resolved.get(StyleProperty::FontSize).unwrap().as_literal(),
            Some("14px")
        );
        // Base survives where no overlay touches it
        assert_eq!(
            resolved.get(StyleProperty::Color).unwrap().as_literal(),
            Some("#0f172a")
        );
    }

    #[test]
    fn test_unknown_variant_and_state_are_no_ops() {
        let styles = sample_styles();
        assert_eq!(resolve(&styles, Some("missing"), Some("missing")), styles.base);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let styles = sample_styles();
        let once = resolve(&styles, Some("compact"), Some("hover"));

        let reapplied = resolve(&ElementStyles::with_base(once.clone()), None, None);
        assert_eq!(reapplied, once);
    }

    #[test]
    fn test_render_props_omit_unset_and_unresolved() {
        let intent = StyleIntent::new()
            .with(StyleProperty::Color, StyleValue::literal("#ffffff"))
            .with(StyleProperty::Background, StyleValue::token("Primary/500"));

        let props = to_render_props(&intent);

        assert_eq!(props.get("color").map(String::as_str), Some("#ffffff"));
        // Unresolved reference carries no concrete value
        assert!(!props.contains_key("background"));
        // Unset properties are omitted, not defaulted
        assert!(!props.contains_key("padding"));
        assert_eq!(props.len(), 1);
    }
}

//! Token and variable reference resolution.
//!
//! A reference resolves by pure lookup against the active design system
//! or the variable store. The reference name is preserved alongside the
//! concrete value so pickers can display "Primary/500" instead of
//! "#3b82f6". A dangling reference never reaches the render path as an
//! error: callers supply a fallback literal.

use serde::{Deserialize, Serialize};
use studio_document::{DesignSystem, StyleIntent, StyleValue, VariableStore};
use thiserror::Error;
use tracing::debug;

/// A style value references a token or variable no longer present
#[derive(Error, Debug, Clone, PartialEq)]
#[error("reference '{name}' does not resolve to a token or variable")]
pub struct DanglingReference {
    pub name: String,
}

/// Concrete value plus the reference it came from (if any), kept for
/// display and editing affordances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedValue {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl ResolvedValue {
    fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reference: None,
        }
    }

    fn referenced(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reference: Some(name.into()),
        }
    }
}

/// Resolve a single style value, failing on dangling references
pub fn try_resolve_value(
    value: &StyleValue,
    system: Option<&DesignSystem>,
    variables: &VariableStore,
) -> Result<ResolvedValue, DanglingReference> {
    match value {
        StyleValue::Literal { value } => Ok(ResolvedValue::literal(value.clone())),

        StyleValue::Token { name } => system
            .and_then(|s| s.token(name))
            .map(|v| ResolvedValue::referenced(v, name.clone()))
            .ok_or_else(|| DanglingReference { name: name.clone() }),

        StyleValue::Variable { name } => variables
            .get(name)
            .map(|v| ResolvedValue::referenced(v.value.to_literal(), name.clone()))
            .ok_or_else(|| DanglingReference { name: name.clone() }),
    }
}

/// Resolve a single style value, substituting `fallback` for dangling
/// references. This is the render-path entry point: it never fails.
pub fn resolve_value(
    value: &StyleValue,
    system: Option<&DesignSystem>,
    variables: &VariableStore,
    fallback: &str,
) -> ResolvedValue {
    match try_resolve_value(value, system, variables) {
        Ok(resolved) => resolved,
        Err(dangling) => {
            debug!(reference = %dangling.name, %fallback, "dangling reference, using fallback");
            ResolvedValue {
                value: fallback.to_string(),
                reference: Some(dangling.name),
            }
        }
    }
}

/// Resolve every reference in an intent to a literal, using `fallback`
/// for dangling references
pub fn resolve_intent(
    intent: &StyleIntent,
    system: Option<&DesignSystem>,
    variables: &VariableStore,
    fallback: &str,
) -> StyleIntent {
    let mut resolved = StyleIntent::new();

    for (property, value) in intent.iter() {
        let concrete = resolve_value(value, system, variables, fallback);
        resolved.set(*property, StyleValue::literal(concrete.value));
    }

    resolved
}

/// One pickable origin for a color value. All three origins produce the
/// same underlying value type (a hex color) and are equally valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColorSource {
    /// Freeform picker
    Custom,

    /// Design-system token, grouped by category
    Token {
        category: String,
        name: String,
        value: String,
    },

    /// Document variable (color-typed or hex-shaped string)
    Variable { name: String, value: String },
}

/// Enumerate the interchangeable color sources a picker presents
pub fn color_sources(
    system: Option<&DesignSystem>,
    variables: &VariableStore,
) -> Vec<ColorSource> {
    let mut sources = vec![ColorSource::Custom];

    if let Some(system) = system {
        for (category, names) in &system.colors {
            for (name, value) in names {
                sources.push(ColorSource::Token {
                    category: category.clone(),
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    for variable in variables.color_variables() {
        // color_variables only yields color-shaped values
        if let Some(value) = variable.value.as_color() {
            sources.push(ColorSource::Variable {
                name: variable.name.clone(),
                value: value.to_string(),
            });
        }
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_document::{Variable, VariableValue};

    fn sample_system() -> DesignSystem {
        let mut ds = DesignSystem::new("ds-1", "Default");
        ds.set_color("Primary", "500", "#3b82f6");
        ds.set_spacing("Scale", "4", "16px");
        ds
    }

    fn sample_variables() -> VariableStore {
        let mut store = VariableStore::new();
        store.insert(Variable {
            id: "var-1".to_string(),
            name: "brand".to_string(),
            value: VariableValue::Color("#ef4444".to_string()),
        });
        store.insert(Variable {
            id: "var-2".to_string(),
            name: "columns".to_string(),
            value: VariableValue::Number(3.0),
        });
        store
    }

    #[test]
    fn test_token_resolution_preserves_reference() {
        let system = sample_system();
        let variables = VariableStore::new();

        let resolved = try_resolve_value(
            &StyleValue::token("Primary/500"),
            Some(&system),
            &variables,
        )
        .unwrap();

        assert_eq!(resolved.value, "#3b82f6");
        assert_eq!(resolved.reference.as_deref(), Some("Primary/500"));
    }

    #[test]
    fn test_variable_resolution() {
        let variables = sample_variables();

        let resolved =
            try_resolve_value(&StyleValue::variable("columns"), None, &variables).unwrap();

        assert_eq!(resolved.value, "3");
        assert_eq!(resolved.reference.as_deref(), Some("columns"));
    }

    #[test]
    fn test_dangling_reference_falls_back() {
        let variables = sample_variables();

        let err =
            try_resolve_value(&StyleValue::variable("missing"), None, &variables).unwrap_err();
        assert_eq!(err.name, "missing");

        let resolved = resolve_value(&StyleValue::variable("missing"), None, &variables, "#000");
        assert_eq!(resolved.value, "#000");
        assert_eq!(resolved.reference.as_deref(), Some("missing"));
    }

    #[test]
    fn test_deleted_variable_resolves_to_fallback() {
        let mut variables = sample_variables();
        let value = StyleValue::variable("brand");

        // Resolves while the variable exists
        let before = resolve_value(&value, None, &variables, "#000000");
        assert_eq!(before.value, "#ef4444");

        // Deleting the variable falls back instead of failing
        variables.remove("brand");
        let after = resolve_value(&value, None, &variables, "#000000");
        assert_eq!(after.value, "#000000");
    }

    #[test]
    fn test_resolve_intent_produces_only_literals() {
        use studio_document::{StyleIntent, StyleProperty};

        let system = sample_system();
        let variables = sample_variables();

        let intent = StyleIntent::new()
            .with(StyleProperty::Background, StyleValue::token("Primary/500"))
            .with(StyleProperty::Color, StyleValue::variable("brand"))
            .with(StyleProperty::Padding, StyleValue::literal("8px"))
            .with(StyleProperty::Margin, StyleValue::token("gone"));

        let resolved = resolve_intent(&intent, Some(&system), &variables, "initial");

        assert_eq!(
            resolved.get(StyleProperty::Background).unwrap().as_literal(),
            Some("#3b82f6")
        );
        assert_eq!(
            resolved.get(StyleProperty::Color).unwrap().as_literal(),
            Some("#ef4444")
        );
        assert_eq!(
            resolved.get(StyleProperty::Padding).unwrap().as_literal(),
            Some("8px")
        );
        assert_eq!(
            resolved.get(StyleProperty::Margin).unwrap().as_literal(),
            Some("initial")
        );
    }

    #[test]
    fn test_color_sources_cover_all_three_origins() {
        let system = sample_system();
        let variables = sample_variables();

        let sources = color_sources(Some(&system), &variables);

        assert!(matches!(sources[0], ColorSource::Custom));
        assert!(sources.iter().any(|s| matches!(
            s,
            ColorSource::Token { category, name, value }
                if category == "Primary" && name == "500" && value == "#3b82f6"
        )));
        assert!(sources.iter().any(|s| matches!(
            s,
            ColorSource::Variable { name, value } if name == "brand" && value == "#ef4444"
        )));

        // Non-color variables are filtered out
        assert!(!sources
            .iter()
            .any(|s| matches!(s, ColorSource::Variable { name, .. } if name == "columns")));
    }
}

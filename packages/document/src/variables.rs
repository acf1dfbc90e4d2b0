//! Document variables: named, typed values usable as dynamic style or
//! content bindings. Distinct from design tokens (not grouped by design
//! category).

use serde::{Deserialize, Serialize};

/// Hex color shape check (#rgb, #rgba, #rrggbb, #rrggbbaa)
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };

    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Typed variable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum VariableValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Color(String),
}

impl VariableValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            VariableValue::String(_) => "string",
            VariableValue::Number(_) => "number",
            VariableValue::Boolean(_) => "boolean",
            VariableValue::Color(_) => "color",
        }
    }

    /// Color value, if this variable is usable where a color is pickable.
    /// Color-typed variables qualify, and so do hex-shaped strings.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            VariableValue::Color(value) => Some(value),
            VariableValue::String(value) if is_hex_color(value) => Some(value),
            _ => None,
        }
    }

    /// Literal rendering of the value (for style/content bindings)
    pub fn to_literal(&self) -> String {
        match self {
            VariableValue::String(value) | VariableValue::Color(value) => value.clone(),
            VariableValue::Number(value) => value.to_string(),
            VariableValue::Boolean(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub value: VariableValue,
}

/// Ordered collection of variables with unique names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableStore {
    pub variables: Vec<Variable>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|v| v.name == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Append a variable. Name uniqueness is the caller's contract
    /// (enforced by editor intents).
    pub fn insert(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn remove(&mut self, name: &str) -> Option<Variable> {
        let pos = self.variables.iter().position(|v| v.name == name)?;
        Some(self.variables.remove(pos))
    }

    /// Variables usable as colors (color-typed or hex-shaped strings)
    pub fn color_variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(|v| v.value.as_color().is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_shapes() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#3b82f6"));
        assert!(is_hex_color("#3b82f6ff"));
        assert!(!is_hex_color("3b82f6"));
        assert!(!is_hex_color("#12"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn test_color_shaped_variables() {
        let color = VariableValue::Color("#ef4444".to_string());
        assert_eq!(color.as_color(), Some("#ef4444"));

        let hex_string = VariableValue::String("#10b981".to_string());
        assert_eq!(hex_string.as_color(), Some("#10b981"));

        let plain = VariableValue::String("hello".to_string());
        assert_eq!(plain.as_color(), None);

        let number = VariableValue::Number(4.0);
        assert_eq!(number.as_color(), None);
    }

    #[test]
    fn test_store_lookup_and_remove() {
        let mut store = VariableStore::new();
        store.insert(Variable {
            id: "var-1".to_string(),
            name: "brand".to_string(),
            value: VariableValue::Color("#3b82f6".to_string()),
        });
        store.insert(Variable {
            id: "var-2".to_string(),
            name: "headline".to_string(),
            value: VariableValue::String("Launch faster".to_string()),
        });

        assert!(store.contains_name("brand"));
        assert_eq!(store.color_variables().count(), 1);

        let removed = store.remove("brand").unwrap();
        assert_eq!(removed.id, "var-1");
        assert!(!store.contains_name("brand"));
        assert!(store.remove("brand").is_none());
    }
}

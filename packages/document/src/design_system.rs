//! Design systems: named token groups referenced by style values.
//!
//! Tokens are grouped by category inside three fixed groups (colors,
//! typography, spacing). A token reference is the "Category/Name" path;
//! lookup searches colors first, then typography, then spacing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// category -> name -> value
pub type TokenGroup = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystem {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: TokenGroup,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub typography: TokenGroup,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub spacing: TokenGroup,
}

/// Split a "Category/Name" token reference
fn split_reference(reference: &str) -> Option<(&str, &str)> {
    reference.split_once('/')
}

fn lookup_in<'a>(group: &'a TokenGroup, reference: &str) -> Option<&'a str> {
    let (category, name) = split_reference(reference)?;
    group.get(category)?.get(name).map(String::as_str)
}

fn remove_in(group: &mut TokenGroup, reference: &str) -> bool {
    let Some((category, name)) = split_reference(reference) else {
        return false;
    };

    let Some(names) = group.get_mut(category) else {
        return false;
    };

    let removed = names.remove(name).is_some();
    if names.is_empty() {
        group.remove(category);
    }
    removed
}

impl DesignSystem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors: TokenGroup::new(),
            typography: TokenGroup::new(),
            spacing: TokenGroup::new(),
        }
    }

    pub fn set_color(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.colors
            .entry(category.into())
            .or_default()
            .insert(name.into(), value.into());
    }

    pub fn set_typography(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.typography
            .entry(category.into())
            .or_default()
            .insert(name.into(), value.into());
    }

    pub fn set_spacing(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.spacing
            .entry(category.into())
            .or_default()
            .insert(name.into(), value.into());
    }

    /// Resolve a "Category/Name" reference across all token groups
    pub fn token(&self, reference: &str) -> Option<&str> {
        lookup_in(&self.colors, reference)
            .or_else(|| lookup_in(&self.typography, reference))
            .or_else(|| lookup_in(&self.spacing, reference))
    }

    pub fn has_token(&self, reference: &str) -> bool {
        self.token(reference).is_some()
    }

    /// Remove a token by reference. Empty categories are pruned.
    pub fn remove_token(&mut self, reference: &str) -> bool {
        remove_in(&mut self.colors, reference)
            || remove_in(&mut self.typography, reference)
            || remove_in(&mut self.spacing, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_system() -> DesignSystem {
        let mut ds = DesignSystem::new("ds-1", "Default");
        ds.set_color("Primary", "500", "#3b82f6");
        ds.set_color("Primary", "600", "#2563eb");
        ds.set_typography("Heading", "xl", "32px");
        ds.set_spacing("Scale", "4", "16px");
        ds
    }

    #[test]
    fn test_token_lookup() {
        let ds = sample_system();
        assert_eq!(ds.token("Primary/500"), Some("#3b82f6"));
        assert_eq!(ds.token("Heading/xl"), Some("32px"));
        assert_eq!(ds.token("Scale/4"), Some("16px"));
        assert_eq!(ds.token("Primary/900"), None);
        assert_eq!(ds.token("no-slash"), None);
    }

    #[test]
    fn test_remove_token_prunes_category() {
        let mut ds = sample_system();
        assert!(ds.remove_token("Heading/xl"));
        assert!(!ds.has_token("Heading/xl"));
        assert!(!ds.typography.contains_key("Heading"));

        // Other groups untouched
        assert!(ds.has_token("Primary/500"));
        assert!(!ds.remove_token("Heading/xl"));
    }
}

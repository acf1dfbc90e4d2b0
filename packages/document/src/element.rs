//! Element tree: the polymorphic node model of a design document.
//!
//! Element kinds form a closed sum type. Each kind carries its own typed
//! property set; children are owned exclusively by their parent, so the
//! document is a tree by construction. Id uniqueness is document-wide
//! and maintained by the editor's id generator.

use crate::style::ElementStyles;
use serde::{Deserialize, Serialize};

/// Container max-width keywords with a fixed pixel mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerWidth {
    Sm,
    Md,
    Lg,
    Xl,
}

impl ContainerWidth {
    pub fn pixels(&self) -> u32 {
        match self {
            ContainerWidth::Sm => 640,
            ContainerWidth::Md => 768,
            ContainerWidth::Lg => 1024,
            ContainerWidth::Xl => 1280,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackDirection {
    Vertical,
    Horizontal,
}

/// Single carousel slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub src: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Kind-specific element properties (closed sum over element kinds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ElementProps {
    Box,

    Text {
        content: String,
    },

    Container {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_width: Option<ContainerWidth>,
    },

    Grid {
        columns: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gap: Option<String>,
    },

    Stack {
        direction: StackDirection,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gap: Option<String>,
    },

    Section,

    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },

    Button {
        label: String,
        variant: ButtonVariant,
        size: ButtonSize,
    },

    Carousel {
        items: Vec<CarouselItem>,
        auto_play: bool,
        interval_ms: u64,
    },

    Modal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    Tabs {
        labels: Vec<String>,
    },

    TextInput {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },

    Checkbox {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        checked: bool,
    },

    Select {
        options: Vec<SelectOption>,
    },
}

/// Element kind tags (property-free view of `ElementProps`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Box,
    Text,
    Container,
    Grid,
    Stack,
    Section,
    Image,
    Button,
    Carousel,
    Modal,
    Tabs,
    TextInput,
    Checkbox,
    Select,
}

impl ElementKind {
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Box => "Box",
            ElementKind::Text => "Text",
            ElementKind::Container => "Container",
            ElementKind::Grid => "Grid",
            ElementKind::Stack => "Stack",
            ElementKind::Section => "Section",
            ElementKind::Image => "Image",
            ElementKind::Button => "Button",
            ElementKind::Carousel => "Carousel",
            ElementKind::Modal => "Modal",
            ElementKind::Tabs => "Tabs",
            ElementKind::TextInput => "Text Input",
            ElementKind::Checkbox => "Checkbox",
            ElementKind::Select => "Select",
        }
    }
}

impl ElementProps {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementProps::Box => ElementKind::Box,
            ElementProps::Text { .. } => ElementKind::Text,
            ElementProps::Container { .. } => ElementKind::Container,
            ElementProps::Grid { .. } => ElementKind::Grid,
            ElementProps::Stack { .. } => ElementKind::Stack,
            ElementProps::Section => ElementKind::Section,
            ElementProps::Image { .. } => ElementKind::Image,
            ElementProps::Button { .. } => ElementKind::Button,
            ElementProps::Carousel { .. } => ElementKind::Carousel,
            ElementProps::Modal { .. } => ElementKind::Modal,
            ElementProps::Tabs { .. } => ElementKind::Tabs,
            ElementProps::TextInput { .. } => ElementKind::TextInput,
            ElementProps::Checkbox { .. } => ElementKind::Checkbox,
            ElementProps::Select { .. } => ElementKind::Select,
        }
    }

    /// Container-like kinds accept children
    pub fn is_container(&self) -> bool {
        matches!(
            self.kind(),
            ElementKind::Box
                | ElementKind::Container
                | ElementKind::Grid
                | ElementKind::Stack
                | ElementKind::Section
                | ElementKind::Modal
                | ElementKind::Tabs
        )
    }
}

/// One node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Unique per document
    pub id: String,

    /// Optional designer-facing label (layers panel)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub props: ElementProps,

    #[serde(default)]
    pub styles: ElementStyles,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(id: impl Into<String>, props: ElementProps) -> Self {
        Self {
            id: id.into(),
            name: None,
            props,
            styles: ElementStyles::default(),
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_styles(mut self, styles: ElementStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }

    pub fn is_container(&self) -> bool {
        self.props.is_container()
    }

    /// Find a node (including self) by id
    pub fn find(&self, id: &str) -> Option<&ElementNode> {
        if self.id == id {
            return Some(self);
        }

        for child in &self.children {
            if let Some(found) = child.find(id) {
                return Some(found);
            }
        }

        None
    }

    /// Find a node (including self) by id, mutably
    pub fn find_mut(&mut self, id: &str) -> Option<&mut ElementNode> {
        if self.id == id {
            return Some(self);
        }

        for child in &mut self.children {
            if let Some(found) = child.find_mut(id) {
                return Some(found);
            }
        }

        None
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Remove a descendant (never self) from the tree and return it
    pub fn remove_descendant(&mut self, id: &str) -> Option<ElementNode> {
        if let Some(pos) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(pos));
        }

        for child in &mut self.children {
            if let Some(removed) = child.remove_descendant(id) {
                return Some(removed);
            }
        }

        None
    }

    /// Collect every id in the subtree (depth-first, self first)
    pub fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.id.clone());
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ElementNode::node_count).sum::<usize>()
    }
}

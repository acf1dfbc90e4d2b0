//! Element rendering: one dispatch over the element-kind sum type.
//!
//! Every kind accepts the common contract (style intent, children for
//! container kinds) plus its own typed properties, and owns its default
//! visual mapping. Explicitly set style properties always win over kind
//! defaults.

use crate::vdom::VNode;
use std::collections::BTreeMap;
use studio_document::{
    ButtonSize, ButtonVariant, CarouselItem, ContainerWidth, EditorState, ElementKind,
    ElementNode, ElementProps, SelectOption, StackDirection,
};
use studio_resolver::{resolve, resolve_intent, to_render_props};
use thiserror::Error;
use tracing::instrument;

/// Fallback literal substituted for dangling style references
const REFERENCE_FALLBACK: &str = "initial";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("image element '{node_id}' has no source")]
    MissingSource { node_id: String },
}

/// Everything rendering needs besides the node itself
pub struct RenderContext<'a> {
    pub design_system: Option<&'a studio_document::DesignSystem>,
    pub variables: &'a studio_document::VariableStore,

    /// Variant overlay selected for preview, if any
    pub variant: Option<&'a str>,

    /// State overlay selected for preview, if any
    pub state: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn from_state(editor: &'a EditorState) -> Self {
        Self {
            design_system: editor.active_design_system(),
            variables: &editor.variables,
            variant: None,
            state: None,
        }
    }

    pub fn with_overlays(mut self, variant: Option<&'a str>, state: Option<&'a str>) -> Self {
        self.variant = variant;
        self.state = state;
        self
    }
}

fn kind_attr(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Box => "box",
        ElementKind::Text => "text",
        ElementKind::Container => "container",
        ElementKind::Grid => "grid",
        ElementKind::Stack => "stack",
        ElementKind::Section => "section",
        ElementKind::Image => "image",
        ElementKind::Button => "button",
        ElementKind::Carousel => "carousel",
        ElementKind::Modal => "modal",
        ElementKind::Tabs => "tabs",
        ElementKind::TextInput => "textInput",
        ElementKind::Checkbox => "checkbox",
        ElementKind::Select => "select",
    }
}

/// Button variant -> (background, color, border)
fn button_variant_table(variant: ButtonVariant) -> (&'static str, &'static str, &'static str) {
    match variant {
        ButtonVariant::Primary => ("#3b82f6", "#ffffff", "none"),
        ButtonVariant::Secondary => ("#e2e8f0", "#0f172a", "none"),
        ButtonVariant::Danger => ("#ef4444", "#ffffff", "none"),
        ButtonVariant::Ghost => ("transparent", "#3b82f6", "1px solid #3b82f6"),
    }
}

/// Button size -> (padding, font-size)
fn button_size_table(size: ButtonSize) -> (&'static str, &'static str) {
    match size {
        ButtonSize::Sm => ("4px 12px", "14px"),
        ButtonSize::Md => ("8px 16px", "16px"),
        ButtonSize::Lg => ("12px 24px", "18px"),
    }
}

/// Render a document subtree to host nodes
#[instrument(skip(node, ctx), fields(node_id = %node.id, kind = ?node.kind()))]
pub fn render_node(node: &ElementNode, ctx: &RenderContext) -> Result<VNode, RenderError> {
    // Flatten overlays, then resolve references to literals
    let intent = resolve(&node.styles, ctx.variant, ctx.state);
    let intent = resolve_intent(&intent, ctx.design_system, ctx.variables, REFERENCE_FALLBACK);
    let explicit = to_render_props(&intent);

    let rendered = match &node.props {
        ElementProps::Box => host_element("div", node, ctx, BTreeMap::new(), explicit)?,

        ElementProps::Text { content } => {
            styled("p", node, BTreeMap::new(), explicit).with_child(VNode::text(content.clone()))
        }

        ElementProps::Container { max_width } => {
            let mut defaults = defaults([("width", "100%"), ("margin", "0 auto")]);
            if let Some(width) = max_width {
                defaults.insert("max-width".to_string(), container_width_value(*width));
            }
            host_element("div", node, ctx, defaults, explicit)?
        }

        ElementProps::Grid { columns, gap } => {
            let mut defaults = defaults([("display", "grid")]);
            defaults.insert(
                "grid-template-columns".to_string(),
                format!("repeat({}, minmax(0, 1fr))", (*columns).max(1)),
            );
            if let Some(gap) = gap {
                defaults.insert("gap".to_string(), gap.clone());
            }
            host_element("div", node, ctx, defaults, explicit)?
        }

        ElementProps::Stack { direction, gap } => {
            let mut defaults = defaults([("display", "flex")]);
            defaults.insert(
                "flex-direction".to_string(),
                match direction {
                    StackDirection::Vertical => "column".to_string(),
                    StackDirection::Horizontal => "row".to_string(),
                },
            );
            if let Some(gap) = gap {
                defaults.insert("gap".to_string(), gap.clone());
            }
            host_element("div", node, ctx, defaults, explicit)?
        }

        ElementProps::Section => host_element("section", node, ctx, BTreeMap::new(), explicit)?,

        ElementProps::Image { src, alt } => {
            if src.trim().is_empty() {
                return Err(RenderError::MissingSource {
                    node_id: node.id.clone(),
                });
            }

            let defaults = defaults([("display", "block"), ("max-width", "100%")]);
            let mut image = styled("img", node, defaults, explicit).with_attr("src", src.clone());
            if let Some(alt) = alt {
                image = image.with_attr("alt", alt.clone());
            }
            image
        }

        ElementProps::Button {
            label,
            variant,
            size,
        } => {
            let (background, color, border) = button_variant_table(*variant);
            let (padding, font_size) = button_size_table(*size);

            let defaults = defaults([
                ("background", background),
                ("color", color),
                ("border", border),
                ("padding", padding),
                ("font-size", font_size),
                ("border-radius", "6px"),
                ("cursor", "pointer"),
            ]);

            styled("button", node, defaults, explicit).with_child(VNode::text(label.clone()))
        }

        ElementProps::Carousel { items, .. } => {
            let defaults = defaults([("position", "relative"), ("overflow", "hidden")]);
            styled("div", node, defaults, explicit)
                .with_attr("data-active-index", "0")
                .with_children(items.iter().map(render_carousel_item).collect())
        }

        ElementProps::Modal { title } => {
            let defaults = defaults([
                ("background", "#ffffff"),
                ("border-radius", "8px"),
                ("box-shadow", "0 20px 40px rgba(15, 23, 42, 0.25)"),
            ]);

            let mut modal = styled("div", node, defaults, explicit)
                .with_attr("role", "dialog")
                .with_attr("aria-modal", "true");

            if let Some(title) = title {
                modal = modal
                    .with_child(VNode::element("h2").with_child(VNode::text(title.clone())));
            }

            modal.with_children(render_children(node, ctx)?)
        }

        ElementProps::Tabs { labels } => {
            let tablist = VNode::element("nav")
                .with_attr("role", "tablist")
                .with_children(
                    labels
                        .iter()
                        .map(|label| {
                            VNode::element("button")
                                .with_attr("role", "tab")
                                .with_child(VNode::text(label.clone()))
                        })
                        .collect(),
                );

            styled("div", node, BTreeMap::new(), explicit)
                .with_child(tablist)
                .with_children(render_children(node, ctx)?)
        }

        ElementProps::TextInput { placeholder } => {
            let mut input =
                styled("input", node, BTreeMap::new(), explicit).with_attr("type", "text");
            if let Some(placeholder) = placeholder {
                input = input.with_attr("placeholder", placeholder.clone());
            }
            input
        }

        ElementProps::Checkbox { label, checked } => {
            let mut input = VNode::element("input").with_attr("type", "checkbox");
            if *checked {
                input = input.with_attr("checked", "checked");
            }

            let mut wrapper = styled("label", node, BTreeMap::new(), explicit).with_child(input);
            if let Some(label) = label {
                wrapper = wrapper.with_child(VNode::text(label.clone()));
            }
            wrapper
        }

        ElementProps::Select { options } => styled("select", node, BTreeMap::new(), explicit)
            .with_children(options.iter().map(render_select_option).collect()),
    };

    Ok(rendered)
}

fn container_width_value(width: ContainerWidth) -> String {
    format!("{}px", width.pixels())
}

fn render_carousel_item(item: &CarouselItem) -> VNode {
    let mut slide = VNode::element("img").with_attr("src", item.src.clone());
    if let Some(alt) = &item.alt {
        slide = slide.with_attr("alt", alt.clone());
    }
    slide
}

fn render_select_option(option: &SelectOption) -> VNode {
    VNode::element("option")
        .with_attr("value", option.value.clone())
        .with_child(VNode::text(option.label.clone()))
}

/// Shared element scaffolding: tag, identity attributes, defaults
/// overlaid by explicit styles
fn styled(
    tag: &str,
    node: &ElementNode,
    defaults: BTreeMap<String, String>,
    explicit: BTreeMap<String, String>,
) -> VNode {
    let mut styles = defaults;
    styles.extend(explicit);

    VNode::element(tag)
        .with_attr("data-node-id", node.id.clone())
        .with_attr("data-element", kind_attr(node.kind()))
        .with_styles(styles)
}

/// Container-kind scaffolding with rendered children
fn host_element(
    tag: &str,
    node: &ElementNode,
    ctx: &RenderContext,
    defaults: BTreeMap<String, String>,
    explicit: BTreeMap<String, String>,
) -> Result<VNode, RenderError> {
    Ok(styled(tag, node, defaults, explicit).with_children(render_children(node, ctx)?))
}

fn render_children(node: &ElementNode, ctx: &RenderContext) -> Result<Vec<VNode>, RenderError> {
    node.children
        .iter()
        .map(|child| render_node(child, ctx))
        .collect()
}

fn defaults<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

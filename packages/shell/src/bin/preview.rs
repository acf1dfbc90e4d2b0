//! Preview: seed a demo document, run a few edits through a session and
//! print both view frames as JSON.

use anyhow::Result;
use studio_document::{
    ButtonSize, ButtonVariant, EditorState, ElementProps, ElementStyles, StackDirection,
    StyleIntent, StyleProperty, StyleValue, VariableValue, ViewMode,
};
use studio_editor::{EditSession, Intent, TokenGroupKind};
use studio_shell::{render_view, ViewOptions};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut session = EditSession::new("preview", EditorState::new("landing-page"));
    let root_id = session.state().document.id.clone();

    info!(session = %session.id, "seeding demo document");

    session.dispatch(&Intent::AddDesignSystem {
        name: "Default".to_string(),
    });
    let system_id = session.state().design_systems[0].id.clone();

    session.dispatch(&Intent::SetToken {
        system_id,
        group: TokenGroupKind::Colors,
        category: "Primary".to_string(),
        name: "500".to_string(),
        value: "#3b82f6".to_string(),
    });

    session.dispatch(&Intent::AddVariable {
        name: "headline".to_string(),
        value: VariableValue::String("Launch faster".to_string()),
    });

    session.begin_batch(Some("Build hero".to_string()));
    session.dispatch(&Intent::InsertElement {
        parent_id: root_id.clone(),
        index: 0,
        name: Some("Hero".to_string()),
        props: ElementProps::Stack {
            direction: StackDirection::Vertical,
            gap: Some("16px".to_string()),
        },
        styles: ElementStyles::with_base(
            StyleIntent::new()
                .with(StyleProperty::Background, StyleValue::token("Primary/500"))
                .with(StyleProperty::Padding, StyleValue::literal("48px")),
        ),
    });
    let hero_id = session.state().document.children[0].id.clone();

    session.dispatch(&Intent::InsertElement {
        parent_id: hero_id.clone(),
        index: 0,
        name: None,
        props: ElementProps::Text {
            content: "Welcome".to_string(),
        },
        styles: Default::default(),
    });
    session.dispatch(&Intent::InsertElement {
        parent_id: hero_id.clone(),
        index: 1,
        name: None,
        props: ElementProps::Button {
            label: "Get started".to_string(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Lg,
        },
        styles: Default::default(),
    });
    session.end_batch();

    let options = ViewOptions {
        selected_node: Some(hero_id),
    };

    let design = render_view(session.state(), &options)?;
    println!("{}", serde_json::to_string_pretty(&design)?);

    session.dispatch(&Intent::SetCurrentView {
        view: ViewMode::Flow,
    });
    let flow = render_view(session.state(), &options)?;
    println!("{}", serde_json::to_string_pretty(&flow)?);

    Ok(())
}

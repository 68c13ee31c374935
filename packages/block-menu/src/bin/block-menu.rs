//! Block Settings Menu Inspector
//!
//! Development binary that evaluates the block settings menu for a scenario
//! file and prints the offered controls as JSON. Optionally activates one
//! control and prints the actions it dispatched.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin block-menu -- scenario.json
//! cargo run --bin block-menu -- scenario.json --activate delete
//! ```
//!
//! Activatable kinds: `remove`, `convertToReusable`, `convertToStatic`, `delete`.
//!
//! # Scenario Format
//!
//! ```json
//! {
//!   "settings": { "templateLock": null },
//!   "blockTypes": [{ "name": "test/unshareable", "title": "Nope", "supports": { "sharing": false } }],
//!   "document": {
//!     "blocks": { "a": { "id": "a", "name": "core/block" } },
//!     "reusableRecords": { "a": { "id": 123 } }
//!   },
//!   "selection": ["a"]
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `BLOCK_MENU_SETTINGS`: Editor settings file, overrides `settings` in the scenario
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use nodespace_block_menu::settings::load_settings;
use nodespace_block_menu::{
    BlockSelection, BlockSettingsMenu, BlockTypeDefinition, BlockTypeRegistry,
    BroadcastDispatcher, ControlKind, DocumentSnapshot, EditorSettings, ReusableAction,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scenario {
    #[serde(default)]
    settings: EditorSettings,

    #[serde(default)]
    block_types: Vec<BlockTypeDefinition>,

    #[serde(default)]
    document: DocumentSnapshot,

    selection: BlockSelection,
}

fn parse_kind(value: &str) -> anyhow::Result<ControlKind> {
    let kind = match value {
        "remove" => ControlKind::Remove,
        "convertToReusable" => ControlKind::Reusable(ReusableAction::ConvertToReusable),
        "convertToStatic" => ControlKind::Reusable(ReusableAction::ConvertToStatic),
        "delete" => ControlKind::Reusable(ReusableAction::Delete),
        other => bail!("Unknown control kind '{}'", other),
    };
    Ok(kind)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let scenario_path: PathBuf = args
        .next()
        .context("Usage: block-menu <scenario.json> [--activate <kind>]")?
        .into();

    let activate = match (args.next().as_deref(), args.next()) {
        (None, _) => None,
        (Some("--activate"), Some(kind)) => Some(parse_kind(&kind)?),
        _ => bail!("Usage: block-menu <scenario.json> [--activate <kind>]"),
    };

    let contents = tokio::fs::read_to_string(&scenario_path)
        .await
        .with_context(|| format!("Failed to read scenario {}", scenario_path.display()))?;
    let mut scenario: Scenario =
        serde_json::from_str(&contents).context("Failed to parse scenario")?;

    if let Ok(settings_path) = env::var("BLOCK_MENU_SETTINGS") {
        scenario.settings = load_settings(&settings_path).await?;
    }

    let mut registry = BlockTypeRegistry::with_core_types();
    for definition in scenario.block_types {
        registry.register(definition)?;
    }

    let dispatcher = BroadcastDispatcher::default();
    let mut receiver = dispatcher.subscribe();

    let menu = BlockSettingsMenu::new(&registry, &dispatcher, &scenario.settings);
    let controls = menu.controls(&scenario.document, &scenario.selection, || {
        tracing::info!("Menu closed");
    });

    if let Some(kind) = activate {
        let control = controls
            .iter()
            .find(|control| control.kind() == kind)
            .with_context(|| format!("Control {:?} is not offered", kind))?;
        control.activate();
    }

    let mut dispatched = Vec::new();
    while let Ok(action) = receiver.try_recv() {
        dispatched.push(action);
    }

    let report = json!({
        "controls": controls
            .iter()
            .map(|control| json!({
                "kind": control.kind(),
                "label": control.label(),
                "action": control.action(),
            }))
            .collect::<Vec<_>>(),
        "dispatched": dispatched,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

//! Block settings menu integration tests
//!
//! Exercises the public API end to end: registry setup, decisions for the
//! shareable/unshareable/reusable scenarios, and dispatch through the
//! broadcast dispatcher a store would subscribe to.

#[cfg(test)]
mod block_settings_menu_tests {
    use anyhow::Result;
    use nodespace_block_menu::settings::load_settings;
    use nodespace_block_menu::{
        Block, BlockId, BlockSelection, BlockSettingsMenu, BlockTypeDefinition,
        BlockTypeRegistry, BroadcastDispatcher, ControlKind, DocumentSnapshot, EditorAction,
        RecordingDispatcher, RemovalGate, ReusabilitySettings, ReusableAction,
        ReusableBlockId, ReusableBlockRecord,
    };
    use serde_json::json;
    use tempfile::TempDir;
    use tokio::time::{timeout, Duration};

    /// Registry with the two test block types
    fn create_test_registry() -> Result<BlockTypeRegistry> {
        let mut registry = BlockTypeRegistry::new();
        registry.register(BlockTypeDefinition::new("test/shareable", "Consider Sharing Me"))?;
        registry.register(
            BlockTypeDefinition::new("test/unshareable", "Don't You Dare Share Me")
                .with_sharing(false),
        )?;
        registry.register(BlockTypeDefinition::new("core/block", "Shared Block"))?;
        Ok(registry)
    }

    #[test]
    fn test_shareable_static_block_scenario() -> Result<()> {
        let registry = create_test_registry()?;
        let dispatcher = RecordingDispatcher::new();
        let settings = ReusabilitySettings::new(&registry, &dispatcher);
        let block = Block::new("test/shareable", json!({}));

        let decision = settings.decide(&block, None);
        assert_eq!(decision.offered(), vec![ReusableAction::ConvertToReusable]);

        decision.activate(ReusableAction::ConvertToReusable);
        assert_eq!(
            dispatcher.take(),
            vec![EditorAction::ConvertBlockToReusable {
                block_id: block.id.clone(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_reusable_block_without_record_id_scenario() -> Result<()> {
        let registry = create_test_registry()?;
        let dispatcher = RecordingDispatcher::new();
        let settings = ReusabilitySettings::new(&registry, &dispatcher);
        let block = Block::new("core/block", json!({}));
        let record: ReusableBlockRecord = serde_json::from_value(json!({}))?;

        let decision = settings.decide(&block, Some(&record));
        assert_eq!(
            decision.offered(),
            vec![ReusableAction::ConvertToStatic, ReusableAction::Delete]
        );

        decision.activate(ReusableAction::Delete);
        assert_eq!(
            dispatcher.take(),
            vec![EditorAction::DeleteReusableBlock { reusable_id: None }]
        );
        Ok(())
    }

    #[test]
    fn test_reusable_block_delete_uses_record_id() -> Result<()> {
        let registry = create_test_registry()?;
        let dispatcher = RecordingDispatcher::new();
        let settings = ReusabilitySettings::new(&registry, &dispatcher);
        let block = Block::new("core/block", json!({}));
        let record: ReusableBlockRecord = serde_json::from_value(json!({ "id": 123 }))?;

        let decision = settings.decide(&block, Some(&record));
        decision.activate(ReusableAction::Delete);
        decision.activate(ReusableAction::ConvertToStatic);

        assert_eq!(
            dispatcher.take(),
            vec![
                EditorAction::DeleteReusableBlock {
                    reusable_id: Some(ReusableBlockId::Numeric(123)),
                },
                EditorAction::ConvertBlockToStatic {
                    block_id: block.id.clone(),
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_unshareable_scenario_ignores_record() -> Result<()> {
        let registry = create_test_registry()?;
        let dispatcher = RecordingDispatcher::new();
        let settings = ReusabilitySettings::new(&registry, &dispatcher);
        let block = Block::new("test/unshareable", json!({}));

        for record in [None, Some(ReusableBlockRecord::new(5))] {
            let decision = settings.decide(&block, record.as_ref());
            assert!(decision.is_empty());
        }
        assert!(dispatcher.is_empty());
        Ok(())
    }

    #[test]
    fn test_removal_gate_for_any_selection() {
        let dispatcher = RecordingDispatcher::new();
        let gate = RemovalGate::new(&dispatcher);

        let selections: Vec<BlockSelection> = vec![
            BlockSelection::default(),
            BlockSelection::single(BlockId::from("a")),
            ["a", "b", "c"].into_iter().map(BlockId::from).collect(),
        ];

        for selection in selections {
            assert!(!gate.decide(true, selection.clone()).is_offered());

            let control = gate.decide(false, selection.clone()).into_control().unwrap();
            control.activate();
            assert_eq!(
                dispatcher.take(),
                vec![EditorAction::RemoveBlocks {
                    ids: selection.into_ids(),
                }]
            );
        }
    }

    #[tokio::test]
    async fn test_menu_dispatches_through_broadcast() -> Result<()> {
        let registry = create_test_registry()?;
        let dispatcher = BroadcastDispatcher::default();
        let mut store = dispatcher.subscribe();

        let shared = Block::new("core/block", json!({ "ref": 7 }));
        let document = DocumentSnapshot::new()
            .with_block(shared.clone())
            .with_reusable(shared.id.clone(), ReusableBlockRecord::new(7));

        let temp_dir = TempDir::new()?;
        let settings = load_settings(temp_dir.path().join("editor.json")).await?;
        let menu = BlockSettingsMenu::new(&registry, &dispatcher, &settings);

        let controls = menu.controls(&document, &BlockSelection::single(shared.id.clone()), || {});
        let delete = controls
            .iter()
            .find(|control| control.kind() == ControlKind::Reusable(ReusableAction::Delete))
            .expect("delete should be offered");
        delete.activate();

        let action = timeout(Duration::from_secs(1), store.recv()).await??;
        assert_eq!(
            action,
            EditorAction::DeleteReusableBlock {
                reusable_id: Some(ReusableBlockId::Numeric(7)),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_locked_settings_file_hides_remove() -> Result<()> {
        let registry = create_test_registry()?;
        let dispatcher = RecordingDispatcher::new();

        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("editor.json");
        tokio::fs::write(&path, r#"{ "templateLock": "all" }"#).await?;
        let settings = load_settings(&path).await?;

        let block = Block::new("test/unshareable", json!({}));
        let document = DocumentSnapshot::new().with_block(block.clone());
        let menu = BlockSettingsMenu::new(&registry, &dispatcher, &settings);

        let controls = menu.controls(&document, &BlockSelection::single(block.id), || {});
        assert!(controls.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_unlocked_false_settings_file_offers_remove() -> Result<()> {
        let registry = create_test_registry()?;
        let dispatcher = RecordingDispatcher::new();

        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("editor.json");
        tokio::fs::write(&path, r#"{ "templateLock": false }"#).await?;
        let settings = load_settings(&path).await?;

        let block = Block::new("test/unshareable", json!({}));
        let document = DocumentSnapshot::new().with_block(block.clone());
        let menu = BlockSettingsMenu::new(&registry, &dispatcher, &settings);

        let controls = menu.controls(&document, &BlockSelection::single(block.id.clone()), || {});
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].kind(), ControlKind::Remove);

        controls[0].activate();
        assert_eq!(
            dispatcher.take(),
            vec![EditorAction::RemoveBlocks { ids: vec![block.id] }]
        );
        Ok(())
    }
}

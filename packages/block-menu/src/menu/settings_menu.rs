//! Block settings menu
//!
//! Host menu for the current selection. It asks each component for its
//! decision and lists what is offered: reusable block settings first (single
//! selection only), then "Remove" for the whole selection.

use crate::menu::{
    ControlKind, RemovalGate, RemoveControl, ReusabilitySettings, ReusableControl,
};
use crate::models::{BlockSelection, BlockSource};
use crate::registry::BlockTypeRegistry;
use crate::settings::EditorSettings;
use crate::store::{ActionDispatcher, EditorAction};

/// A control offered by the settings menu
#[derive(Debug)]
pub enum MenuControl<'a> {
    Reusable(ReusableControl<'a>),
    Remove(RemoveControl<'a>),
}

impl MenuControl<'_> {
    pub fn kind(&self) -> ControlKind {
        match self {
            MenuControl::Reusable(control) => ControlKind::Reusable(control.kind()),
            MenuControl::Remove(control) => control.kind(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    pub fn action(&self) -> EditorAction {
        match self {
            MenuControl::Reusable(control) => control.action().clone(),
            MenuControl::Remove(control) => control.action(),
        }
    }

    pub fn activate(&self) {
        match self {
            MenuControl::Reusable(control) => control.activate(),
            MenuControl::Remove(control) => control.activate(),
        }
    }
}

/// Settings menu bound to one editing context
pub struct BlockSettingsMenu<'a> {
    registry: &'a BlockTypeRegistry,
    dispatcher: &'a dyn ActionDispatcher,
    settings: &'a EditorSettings,
}

impl<'a> BlockSettingsMenu<'a> {
    pub fn new(
        registry: &'a BlockTypeRegistry,
        dispatcher: &'a dyn ActionDispatcher,
        settings: &'a EditorSettings,
    ) -> Self {
        Self {
            registry,
            dispatcher,
            settings,
        }
    }

    /// Controls offered for `selection`
    ///
    /// `on_close` runs after "Remove" has dispatched, so the host can dismiss
    /// the menu.
    pub fn controls<S>(
        &self,
        source: &S,
        selection: &BlockSelection,
        on_close: impl Fn() + 'a,
    ) -> Vec<MenuControl<'a>>
    where
        S: BlockSource + ?Sized,
    {
        if selection.is_empty() {
            return Vec::new();
        }

        let mut controls = Vec::new();

        if let Some(block) = selection.only().and_then(|id| source.block(id)) {
            let record = source.reusable_record(&block.id);
            let decision =
                ReusabilitySettings::new(self.registry, self.dispatcher).decide(block, record);
            controls.extend(
                decision
                    .into_controls()
                    .into_iter()
                    .map(MenuControl::Reusable),
            );
        }

        let removal =
            RemovalGate::new(self.dispatcher).decide(self.settings.is_locked(), selection.clone());
        if let Some(control) = removal.into_control() {
            controls.push(MenuControl::Remove(control.with_on_complete(on_close)));
        }

        tracing::debug!(
            "Settings menu for {} block(s): {} control(s)",
            selection.len(),
            controls.len()
        );
        controls
    }
}

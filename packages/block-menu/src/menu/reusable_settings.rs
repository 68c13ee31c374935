//! Reusable block settings
//!
//! Decides which shared-block actions apply to a block:
//!
//! | Type supports sharing | Reusable record | Offered                     |
//! |-----------------------|-----------------|-----------------------------|
//! | no / unregistered     | any             | nothing                     |
//! | yes                   | none            | ConvertToReusable           |
//! | yes                   | present         | ConvertToStatic, Delete     |
//!
//! Conversions target the block instance; `Delete` targets the shared record
//! and carries the record's id.

use crate::menu::ControlKind;
use crate::models::{Block, ReusableBlockRecord};
use crate::registry::BlockTypeRegistry;
use crate::store::{ActionDispatcher, EditorAction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sharing state of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SharingState {
    /// Type is unregistered or opted out of sharing
    Unsupported,
    /// Regular block, no shared record
    Static,
    /// Block is backed by a shared record
    Reusable,
}

/// Actions of the reusable block settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReusableAction {
    ConvertToReusable,
    ConvertToStatic,
    Delete,
}

impl ReusableAction {
    pub fn label(&self) -> &'static str {
        ControlKind::Reusable(*self).label()
    }
}

/// Classify a block against the registry and its reusable record
pub fn sharing_state(
    registry: &BlockTypeRegistry,
    block: &Block,
    record: Option<&ReusableBlockRecord>,
) -> SharingState {
    if !registry.supports_sharing(&block.name) {
        return SharingState::Unsupported;
    }

    match record {
        None => SharingState::Static,
        Some(_) => SharingState::Reusable,
    }
}

/// A bound reusable-settings control
pub struct ReusableControl<'a> {
    kind: ReusableAction,
    action: EditorAction,
    dispatcher: &'a dyn ActionDispatcher,
}

impl ReusableControl<'_> {
    pub fn kind(&self) -> ReusableAction {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Action dispatched on activation
    pub fn action(&self) -> &EditorAction {
        &self.action
    }

    /// Fire-and-forget dispatch of the bound action
    pub fn activate(&self) {
        tracing::debug!("Activating {:?}: {}", self.kind, self.action.action_type());
        self.dispatcher.dispatch(self.action.clone());
    }
}

impl fmt::Debug for ReusableControl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusableControl")
            .field("kind", &self.kind)
            .field("action", &self.action)
            .finish()
    }
}

/// Result of [`ReusabilitySettings::decide`]
#[derive(Debug)]
pub struct ReusabilityDecision<'a> {
    state: SharingState,
    controls: Vec<ReusableControl<'a>>,
}

impl<'a> ReusabilityDecision<'a> {
    pub fn state(&self) -> SharingState {
        self.state
    }

    /// Offered actions in display order
    pub fn offered(&self) -> Vec<ReusableAction> {
        self.controls.iter().map(|control| control.kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn controls(&self) -> &[ReusableControl<'a>] {
        &self.controls
    }

    pub fn control(&self, kind: ReusableAction) -> Option<&ReusableControl<'a>> {
        self.controls.iter().find(|control| control.kind == kind)
    }

    /// Activate an offered action; returns false if it is not offered
    pub fn activate(&self, kind: ReusableAction) -> bool {
        match self.control(kind) {
            Some(control) => {
                control.activate();
                true
            }
            None => false,
        }
    }

    pub fn into_controls(self) -> Vec<ReusableControl<'a>> {
        self.controls
    }
}

/// Reusable block settings panel
pub struct ReusabilitySettings<'a> {
    registry: &'a BlockTypeRegistry,
    dispatcher: &'a dyn ActionDispatcher,
}

impl<'a> ReusabilitySettings<'a> {
    pub fn new(registry: &'a BlockTypeRegistry, dispatcher: &'a dyn ActionDispatcher) -> Self {
        Self {
            registry,
            dispatcher,
        }
    }

    pub fn decide(
        &self,
        block: &Block,
        record: Option<&ReusableBlockRecord>,
    ) -> ReusabilityDecision<'a> {
        let state = sharing_state(self.registry, block, record);

        let actions = match (state, record) {
            (SharingState::Static, _) => vec![(
                ReusableAction::ConvertToReusable,
                EditorAction::ConvertBlockToReusable {
                    block_id: block.id.clone(),
                },
            )],
            (SharingState::Reusable, Some(record)) => {
                match &record.id {
                    Some(reusable_id) => tracing::debug!(
                        "Block {} is backed by reusable block {}",
                        block.id,
                        reusable_id
                    ),
                    None => tracing::debug!(
                        "Reusable record for block {} has no id; delete will carry none",
                        block.id
                    ),
                }
                vec![
                    (
                        ReusableAction::ConvertToStatic,
                        EditorAction::ConvertBlockToStatic {
                            block_id: block.id.clone(),
                        },
                    ),
                    (
                        ReusableAction::Delete,
                        EditorAction::DeleteReusableBlock {
                            reusable_id: record.id.clone(),
                        },
                    ),
                ]
            }
            _ => Vec::new(),
        };

        tracing::debug!(
            "Reusable settings for block {} ({}): {:?}",
            block.id,
            block.name,
            state
        );

        ReusabilityDecision {
            state,
            controls: actions
                .into_iter()
                .map(|(kind, action)| ReusableControl {
                    kind,
                    action,
                    dispatcher: self.dispatcher,
                })
                .collect(),
        }
    }
}

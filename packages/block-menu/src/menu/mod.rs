//! Block Settings Menu Controls
//!
//! - `RemovalGate` - "Remove" gated by the template lock
//! - `ReusabilitySettings` - Convert to/from a shared block, delete the shared record
//! - `BlockSettingsMenu` - Host menu assembling both for a selection
//!
//! Every component returns a decision value: either nothing, or controls whose
//! `activate()` dispatches one store action. Deciding never dispatches.

mod remove_button;
mod reusable_settings;
mod settings_menu;


pub use remove_button::{RemovalDecision, RemovalGate, RemoveControl};
pub use reusable_settings::{
    sharing_state, ReusabilityDecision, ReusabilitySettings, ReusableAction, ReusableControl,
    SharingState,
};
pub use settings_menu::{BlockSettingsMenu, MenuControl};

use serde::{Deserialize, Serialize};

/// Kind of control the host renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    Remove,
    Reusable(ReusableAction),
}

impl ControlKind {
    /// Stable display label, used as the translation key by hosts
    pub fn label(&self) -> &'static str {
        match self {
            ControlKind::Remove => "Remove",
            ControlKind::Reusable(ReusableAction::ConvertToReusable) => "Convert to Shared Block",
            ControlKind::Reusable(ReusableAction::ConvertToStatic) => "Convert to Regular Block",
            ControlKind::Reusable(ReusableAction::Delete) => "Delete Shared Block",
        }
    }
}

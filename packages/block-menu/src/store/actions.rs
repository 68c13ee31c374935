//! Store actions dispatched by the block settings menu
//!
//! Actions describe a requested change; the store decides how (and whether)
//! to apply it. The JSON form is internally tagged with `type`:
//!
//! ```json
//! { "type": "REMOVE_BLOCKS", "ids": ["a", "b"] }
//! { "type": "DELETE_REUSABLE_BLOCK", "reusableId": 123 }
//! ```

use crate::models::{BlockId, ReusableBlockId};
use serde::{Deserialize, Serialize};

/// Actions the menu can hand to the document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditorAction {
    /// Remove the given blocks, in order
    RemoveBlocks { ids: Vec<BlockId> },

    /// Extract the block's content into a new shared record
    #[serde(rename_all = "camelCase")]
    ConvertBlockToReusable { block_id: BlockId },

    /// Inline the shared content back into a regular block
    #[serde(rename_all = "camelCase")]
    ConvertBlockToStatic { block_id: BlockId },

    /// Delete the shared record itself (not the block instance)
    #[serde(rename_all = "camelCase")]
    DeleteReusableBlock { reusable_id: Option<ReusableBlockId> },
}

impl EditorAction {
    /// Wire tag of the action
    pub fn action_type(&self) -> &'static str {
        match self {
            EditorAction::RemoveBlocks { .. } => "REMOVE_BLOCKS",
            EditorAction::ConvertBlockToReusable { .. } => "CONVERT_BLOCK_TO_REUSABLE",
            EditorAction::ConvertBlockToStatic { .. } => "CONVERT_BLOCK_TO_STATIC",
            EditorAction::DeleteReusableBlock { .. } => "DELETE_REUSABLE_BLOCK",
        }
    }
}

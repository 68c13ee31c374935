//! Block Data Structures
//!
//! A block is an addressable unit of editable content. The document store owns
//! blocks; the menu only ever borrows them for the length of one decision.
//!
//! # Examples
//!
//! ```rust
//! use nodespace_block_menu::models::{Block, BlockSelection};
//! use serde_json::json;
//!
//! let paragraph = Block::new("core/paragraph", json!({ "content": "Hello" }));
//! let selection = BlockSelection::single(paragraph.id.clone());
//! assert_eq!(selection.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque block identifier (UUID for blocks created here, any string otherwise)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh UUID v4 identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A block instance as seen by the settings menu
///
/// # Fields
///
/// - `id`: Block identifier
/// - `name`: Block type name, resolved against the block type registry
/// - `attributes`: Type-specific attributes, never inspected by the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: BlockId,

    /// Block type name (e.g., "core/paragraph", "core/block")
    pub name: String,

    #[serde(default = "empty_attributes")]
    pub attributes: serde_json::Value,
}

fn empty_attributes() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Block {
    /// Create a block with a generated identifier
    pub fn new(name: impl Into<String>, attributes: serde_json::Value) -> Self {
        Self::with_id(BlockId::generate(), name, attributes)
    }

    /// Create a block with a caller-provided identifier
    pub fn with_id(id: BlockId, name: impl Into<String>, attributes: serde_json::Value) -> Self {
        Self {
            id,
            name: name.into(),
            attributes,
        }
    }
}

/// Ordered set of selected block identifiers
///
/// Order is kept as given and is the order forwarded to the store when the
/// selection is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSelection(Vec<BlockId>);

impl BlockSelection {
    pub fn new(ids: Vec<BlockId>) -> Self {
        Self(ids)
    }

    /// Selection holding exactly one block
    pub fn single(id: BlockId) -> Self {
        Self(vec![id])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The selected id when exactly one block is selected
    pub fn only(&self) -> Option<&BlockId> {
        match self.0.as_slice() {
            [id] => Some(id),
            _ => None,
        }
    }

    pub fn ids(&self) -> &[BlockId] {
        &self.0
    }

    pub fn into_ids(self) -> Vec<BlockId> {
        self.0
    }
}

impl From<Vec<BlockId>> for BlockSelection {
    fn from(ids: Vec<BlockId>) -> Self {
        Self(ids)
    }
}

impl FromIterator<BlockId> for BlockSelection {
    fn from_iter<I: IntoIterator<Item = BlockId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

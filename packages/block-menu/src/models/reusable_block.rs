//! Reusable (shared) block records
//!
//! When a block has been converted to a reusable block, the store keeps a
//! record of the shared definition. The record's presence is what puts the
//! block in reusable form; its id is what deletion targets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a reusable block
///
/// Persisted records carry numeric ids, records the store has not saved yet
/// may carry an opaque string id. Both serialize as the bare value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReusableBlockId {
    Numeric(u64),
    Opaque(String),
}

impl fmt::Display for ReusableBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReusableBlockId::Numeric(id) => write!(f, "{}", id),
            ReusableBlockId::Opaque(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ReusableBlockId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ReusableBlockId {
    fn from(id: &str) -> Self {
        Self::Opaque(id.to_string())
    }
}

/// Association between a block instance and its shared definition
///
/// The id may be absent, e.g. for a record that has not been persisted yet.
/// The menu forwards it as-is and leaves the meaning of a missing id to the
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReusableBlockRecord {
    #[serde(default)]
    pub id: Option<ReusableBlockId>,
}

impl ReusableBlockRecord {
    /// Record of a persisted reusable block
    pub fn new(id: u64) -> Self {
        Self::with_id(ReusableBlockId::from(id))
    }

    pub fn with_id(id: ReusableBlockId) -> Self {
        Self { id: Some(id) }
    }

    /// Record without an identifier
    pub fn unsaved() -> Self {
        Self { id: None }
    }
}

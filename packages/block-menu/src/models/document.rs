//! Document snapshot
//!
//! Read-only view of the blocks and reusable records the settings menu needs
//! for one render. Hosts with their own store implement [`BlockSource`]
//! instead.

use crate::models::{Block, BlockId, ReusableBlockRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read access to the blocks the settings menu renders for
pub trait BlockSource {
    fn block(&self, id: &BlockId) -> Option<&Block>;

    /// Reusable record backing the block, if it is in reusable form
    fn reusable_record(&self, id: &BlockId) -> Option<&ReusableBlockRecord>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    #[serde(default)]
    blocks: HashMap<BlockId, Block>,

    /// Reusable records keyed by the block they back
    #[serde(default)]
    reusable_records: HashMap<BlockId, ReusableBlockRecord>,
}

impl DocumentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_block(&mut self, block: Block) {
        self.blocks.insert(block.id.clone(), block);
    }

    /// Mark a block as reusable
    pub fn link_reusable(&mut self, block_id: BlockId, record: ReusableBlockRecord) {
        self.reusable_records.insert(block_id, record);
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.insert_block(block);
        self
    }

    pub fn with_reusable(mut self, block_id: BlockId, record: ReusableBlockRecord) -> Self {
        self.link_reusable(block_id, record);
        self
    }
}

impl BlockSource for DocumentSnapshot {
    fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    fn reusable_record(&self, id: &BlockId) -> Option<&ReusableBlockRecord> {
        self.reusable_records.get(id)
    }
}

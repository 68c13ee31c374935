//! Data Models
//!
//! - `Block` / `BlockId` / `BlockSelection` - Block instances and selections
//! - `BlockTypeDefinition` - Registry entry with capability flags
//! - `ReusableBlockRecord` - Link from a block to its shared definition
//! - `DocumentSnapshot` - Blocks and records for one menu render

mod block;
mod block_type;
mod document;
mod reusable_block;

pub use block::{Block, BlockId, BlockSelection};
pub use block_type::{BlockSupports, BlockTypeDefinition};
pub use document::{BlockSource, DocumentSnapshot};
pub use reusable_block::{ReusableBlockId, ReusableBlockRecord};

//! Block Type Definitions
//!
//! Registry entries describing a block type and the capabilities it supports.
//! Capabilities default to enabled; a type opts out explicitly.
//!
//! ## Example Definition
//!
//! ```json
//! {
//!   "name": "test/unshareable",
//!   "title": "Don't You Dare Share Me",
//!   "category": "common",
//!   "supports": { "sharing": false }
//! }
//! ```

use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Capability flags of a block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSupports {
    /// Whether instances may be converted into a shared (reusable) block
    #[serde(default = "enabled")]
    pub sharing: bool,
}

impl Default for BlockSupports {
    fn default() -> Self {
        Self { sharing: true }
    }
}

/// Registered definition of a block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTypeDefinition {
    /// Unique `namespace/name` identifier
    pub name: String,

    /// Human-readable title
    pub title: String,

    /// Inserter category (e.g., "common", "layout")
    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default)]
    pub supports: BlockSupports,
}

fn default_category() -> String {
    "common".to_string()
}

impl BlockTypeDefinition {
    /// Definition with default capabilities in the "common" category
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            category: default_category(),
            supports: BlockSupports::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sharing(mut self, sharing: bool) -> Self {
        self.supports.sharing = sharing;
        self
    }

    pub fn supports_sharing(&self) -> bool {
        self.supports.sharing
    }
}

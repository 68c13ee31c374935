//! Block Type Registry
//!
//! Maps block type names to their [`BlockTypeDefinition`]. The settings menu
//! reads capability flags from here instead of probing blocks directly: a
//! type that is not registered supports nothing.
//!
//! ## Example Usage
//!
//! ```rust
//! use nodespace_block_menu::registry::BlockTypeRegistry;
//! use nodespace_block_menu::models::BlockTypeDefinition;
//!
//! let mut registry = BlockTypeRegistry::with_core_types();
//! registry
//!     .register(BlockTypeDefinition::new("test/unshareable", "Nope").with_sharing(false))
//!     .unwrap();
//!
//! assert!(registry.supports_sharing("core/paragraph"));
//! assert!(!registry.supports_sharing("test/unshareable"));
//! assert!(!registry.supports_sharing("test/unknown"));
//! ```


use crate::error::BlockRegistryError;
use crate::models::BlockTypeDefinition;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// `namespace/name`, both parts lowercase, starting with a letter
const BLOCK_NAME_PATTERN: &str = r"^[a-z][a-z0-9-]*/[a-z][a-z0-9-]*$";

/// Type name of the reusable block wrapper
pub const REUSABLE_BLOCK_TYPE: &str = "core/block";

/// Type name of the default paragraph block
pub const PARAGRAPH_BLOCK_TYPE: &str = "core/paragraph";

/// Check a block type name against the `namespace/name` convention
///
/// # Examples
///
/// ```
/// # use nodespace_block_menu::registry::is_valid_block_name;
/// assert!(is_valid_block_name("core/paragraph"));
/// assert!(is_valid_block_name("my-plugin/fancy-quote2"));
/// assert!(!is_valid_block_name("paragraph"));
/// assert!(!is_valid_block_name("Core/Paragraph"));
/// ```
pub fn is_valid_block_name(name: &str) -> bool {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let name_regex = NAME_REGEX.get_or_init(|| Regex::new(BLOCK_NAME_PATTERN).unwrap());

    name_regex.is_match(name)
}

/// Registry of block type definitions keyed by name
#[derive(Debug, Clone, Default)]
pub struct BlockTypeRegistry {
    types: HashMap<String, BlockTypeDefinition>,
}

impl BlockTypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the core block types
    ///
    /// - `core/block` - reusable block wrapper
    /// - `core/paragraph` - default text block
    pub fn with_core_types() -> Self {
        let mut registry = Self::new();
        for definition in core_block_types() {
            registry
                .types
                .insert(definition.name.clone(), definition);
        }
        registry
    }

    /// Register a block type
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the name is not `namespace/name`
    /// - `AlreadyRegistered` if a type with this name exists
    pub fn register(&mut self, definition: BlockTypeDefinition) -> Result<(), BlockRegistryError> {
        if !is_valid_block_name(&definition.name) {
            tracing::warn!("Rejected block type with invalid name '{}'", definition.name);
            return Err(BlockRegistryError::invalid_name(definition.name));
        }

        if self.types.contains_key(&definition.name) {
            tracing::warn!("Block type '{}' is already registered", definition.name);
            return Err(BlockRegistryError::already_registered(definition.name));
        }

        tracing::info!(
            "Registered block type '{}' (sharing: {})",
            definition.name,
            definition.supports_sharing()
        );
        self.types.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Remove a block type, returning its definition
    pub fn unregister(&mut self, name: &str) -> Result<BlockTypeDefinition, BlockRegistryError> {
        match self.types.remove(name) {
            Some(definition) => {
                tracing::info!("Unregistered block type '{}'", name);
                Ok(definition)
            }
            None => Err(BlockRegistryError::not_registered(name)),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&BlockTypeDefinition> {
        self.types.get(name)
    }

    /// Whether blocks of this type may become reusable
    ///
    /// Unregistered types never support sharing.
    pub fn supports_sharing(&self, name: &str) -> bool {
        self.lookup(name)
            .map(BlockTypeDefinition::supports_sharing)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn core_block_types() -> Vec<BlockTypeDefinition> {
    vec![
        BlockTypeDefinition::new(REUSABLE_BLOCK_TYPE, "Shared Block").with_category("reusable"),
        BlockTypeDefinition::new(PARAGRAPH_BLOCK_TYPE, "Paragraph"),
    ]
}

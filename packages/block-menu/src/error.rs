//! Error types for the block settings menu
//!
//! The decision layer itself never fails: unknown block types and missing
//! records degrade to "nothing offered". Errors only come from the ambient
//! pieces around it, registering block types and loading editor settings.

use thiserror::Error;

/// Errors raised by [`crate::registry::BlockTypeRegistry`]
///
/// # Examples
///
/// ```rust
/// use nodespace_block_menu::BlockRegistryError;
///
/// let err = BlockRegistryError::invalid_name("Paragraph");
/// assert!(err.to_string().contains("Paragraph"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockRegistryError {
    /// Block type names must be `namespace/name`, lowercase
    #[error("Invalid block type name '{name}': expected 'namespace/name' with lowercase letters, digits and dashes")]
    InvalidName { name: String },

    /// A block type with the same name is already registered
    #[error("Block type '{name}' is already registered")]
    AlreadyRegistered { name: String },

    /// Tried to unregister a block type that was never registered
    #[error("Block type '{name}' is not registered")]
    NotRegistered { name: String },
}

impl BlockRegistryError {
    /// Create an InvalidName error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create an AlreadyRegistered error
    pub fn already_registered(name: impl Into<String>) -> Self {
        Self::AlreadyRegistered { name: name.into() }
    }

    /// Create a NotRegistered error
    pub fn not_registered(name: impl Into<String>) -> Self {
        Self::NotRegistered { name: name.into() }
    }
}

/// Errors raised while loading [`crate::settings::EditorSettings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("Failed to read editor settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `EditorSettings`
    #[error("Failed to parse editor settings: {0}")]
    Parse(#[from] serde_json::Error),
}

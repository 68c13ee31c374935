//! NodeSpace Block Settings Menu
//!
//! This crate decides which actions the block settings menu offers for the
//! current selection, and what each offered control dispatches to the
//! document store when activated.
//!
//! # Architecture
//!
//! - **Pure decisions**: every `decide` call is a function of the block, the
//!   reusable record and the editor settings; nothing is cached between calls
//! - **Capability registry**: sharing support is a flag on the registered
//!   block type, an unknown type has no sharing support
//! - **Fire-and-forget dispatch**: controls hand an [`store::EditorAction`] to
//!   an [`store::ActionDispatcher`] and never wait on the store
//!
//! # Modules
//!
//! - [`models`] - Blocks, block type definitions, reusable block records
//! - [`registry`] - Block type registry with capability lookup
//! - [`settings`] - Editor settings (template lock)
//! - [`store`] - Store actions and dispatchers
//! - [`menu`] - Remove gate, reusable block settings, settings menu

pub mod error;
pub mod menu;
pub mod models;
pub mod registry;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use error::{BlockRegistryError, SettingsError};
pub use menu::*;
pub use models::*;
pub use registry::BlockTypeRegistry;
pub use settings::{EditorSettings, TemplateLock};
pub use store::{ActionDispatcher, BroadcastDispatcher, EditorAction, RecordingDispatcher};

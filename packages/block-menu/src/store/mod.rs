//! Store dispatch surface
//!
//! - `EditorAction` - Actions the menu requests from the document store
//! - `ActionDispatcher` - Trait the store side implements
//! - `RecordingDispatcher` / `BroadcastDispatcher` - Ready-made dispatchers

mod actions;
mod dispatcher;

pub use actions::EditorAction;
pub use dispatcher::{
    ActionDispatcher, BroadcastDispatcher, RecordingDispatcher, DEFAULT_CHANNEL_CAPACITY,
};

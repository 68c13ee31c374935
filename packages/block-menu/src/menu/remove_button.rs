//! Remove block control
//!
//! Offered unless the editing context carries a template lock. Activation
//! dispatches removal of the selection first and then runs the caller's
//! completion callback, so the callback can rely on removal having been
//! dispatched.

use crate::menu::ControlKind;
use crate::models::BlockSelection;
use crate::store::{ActionDispatcher, EditorAction};
use std::fmt;

/// Outcome of the removal gate
pub enum RemovalDecision<'a> {
    Offered(RemoveControl<'a>),
    /// Locked context: render nothing
    Suppressed,
}

impl<'a> RemovalDecision<'a> {
    pub fn is_offered(&self) -> bool {
        matches!(self, RemovalDecision::Offered(_))
    }

    pub fn control(&self) -> Option<&RemoveControl<'a>> {
        match self {
            RemovalDecision::Offered(control) => Some(control),
            RemovalDecision::Suppressed => None,
        }
    }

    pub fn into_control(self) -> Option<RemoveControl<'a>> {
        match self {
            RemovalDecision::Offered(control) => Some(control),
            RemovalDecision::Suppressed => None,
        }
    }
}

impl fmt::Debug for RemovalDecision<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalDecision::Offered(control) => f.debug_tuple("Offered").field(control).finish(),
            RemovalDecision::Suppressed => f.write_str("Suppressed"),
        }
    }
}

/// Bound "Remove" control for a selection
pub struct RemoveControl<'a> {
    block_ids: BlockSelection,
    dispatcher: &'a dyn ActionDispatcher,
    on_complete: Option<Box<dyn Fn() + 'a>>,
}

impl<'a> RemoveControl<'a> {
    /// Run `callback` after the removal has been dispatched
    pub fn with_on_complete(mut self, callback: impl Fn() + 'a) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn kind(&self) -> ControlKind {
        ControlKind::Remove
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    pub fn block_ids(&self) -> &BlockSelection {
        &self.block_ids
    }

    /// Action this control dispatches
    pub fn action(&self) -> EditorAction {
        EditorAction::RemoveBlocks {
            ids: self.block_ids.ids().to_vec(),
        }
    }

    /// Dispatch removal, then run the completion callback
    pub fn activate(&self) {
        tracing::debug!("Removing {} block(s)", self.block_ids.len());
        self.dispatcher.dispatch(self.action());

        if let Some(on_complete) = &self.on_complete {
            on_complete();
        }
    }
}

impl fmt::Debug for RemoveControl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoveControl")
            .field("block_ids", &self.block_ids)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Decides whether block removal is offered
pub struct RemovalGate<'a> {
    dispatcher: &'a dyn ActionDispatcher,
}

impl<'a> RemovalGate<'a> {
    pub fn new(dispatcher: &'a dyn ActionDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Suppressed whenever `is_locked` is true, offered otherwise
    pub fn decide(&self, is_locked: bool, block_ids: BlockSelection) -> RemovalDecision<'a> {
        if is_locked {
            tracing::debug!("Remove suppressed by template lock");
            return RemovalDecision::Suppressed;
        }

        RemovalDecision::Offered(RemoveControl {
            block_ids,
            dispatcher: self.dispatcher,
            on_complete: None,
        })
    }
}

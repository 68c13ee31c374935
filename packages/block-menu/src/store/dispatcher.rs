//! Action dispatchers
//!
//! The dispatch surface between the menu and the document store. Dispatch is
//! fire-and-forget: a dispatcher accepts the action and returns immediately,
//! any failure while applying it is reported through the store's own channel.

use crate::store::EditorAction;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

/// Default capacity of the broadcast channel
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Receives actions from menu controls
pub trait ActionDispatcher {
    fn dispatch(&self, action: EditorAction);
}

impl<D: ActionDispatcher + ?Sized> ActionDispatcher for Arc<D> {
    fn dispatch(&self, action: EditorAction) {
        (**self).dispatch(action)
    }
}

/// Keeps every dispatched action in order
///
/// Useful for hosts that batch actions into their own store, and for tests.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    actions: Mutex<Vec<EditorAction>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded actions
    pub fn actions(&self) -> Vec<EditorAction> {
        self.lock().clone()
    }

    /// Drain the recorded actions
    pub fn take(&self) -> Vec<EditorAction> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EditorAction>> {
        self.actions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&self, action: EditorAction) {
        tracing::debug!("Recorded action {}", action.action_type());
        self.lock().push(action);
    }
}

/// Forwards actions to every subscriber of a broadcast channel
///
/// Mirrors how domain events reach the frontend: the store side subscribes
/// and applies actions asynchronously. Dispatching with no subscriber drops
/// the action.
#[derive(Debug, Clone)]
pub struct BroadcastDispatcher {
    sender: broadcast::Sender<EditorAction>,
}

impl BroadcastDispatcher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorAction> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl ActionDispatcher for BroadcastDispatcher {
    fn dispatch(&self, action: EditorAction) {
        let action_type = action.action_type();
        match self.sender.send(action) {
            Ok(receivers) => {
                tracing::debug!("Dispatched {} to {} subscriber(s)", action_type, receivers)
            }
            Err(_) => tracing::debug!("Dropped {}: no store subscribed", action_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockId, ReusableBlockId};
    use tokio::time::{timeout, Duration};

    #[test]
    fn test_recording_dispatcher_keeps_order() {
        let dispatcher = RecordingDispatcher::new();
        assert!(dispatcher.is_empty());

        dispatcher.dispatch(EditorAction::ConvertBlockToStatic {
            block_id: BlockId::from("a"),
        });
        dispatcher.dispatch(EditorAction::DeleteReusableBlock {
            reusable_id: Some(ReusableBlockId::Numeric(7)),
        });

        assert_eq!(dispatcher.len(), 2);
        let actions = dispatcher.take();
        assert_eq!(actions[0].action_type(), "CONVERT_BLOCK_TO_STATIC");
        assert_eq!(actions[1].action_type(), "DELETE_REUSABLE_BLOCK");
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn test_arc_dispatcher_forwards() {
        let recorder = Arc::new(RecordingDispatcher::new());
        let shared: Arc<RecordingDispatcher> = Arc::clone(&recorder);
        let dispatcher: &dyn ActionDispatcher = &shared;

        dispatcher.dispatch(EditorAction::RemoveBlocks { ids: vec![] });

        assert_eq!(recorder.len(), 1);
    }

    #[tokio::test]
    async fn test_broadcast_dispatcher_delivers_to_subscribers() {
        let dispatcher = BroadcastDispatcher::default();
        let mut first = dispatcher.subscribe();
        let mut second = dispatcher.subscribe();
        assert_eq!(dispatcher.subscriber_count(), 2);

        let action = EditorAction::RemoveBlocks {
            ids: vec![BlockId::from("a")],
        };
        dispatcher.dispatch(action.clone());

        let received = timeout(Duration::from_secs(1), first.recv())
            .await
            .expect("Timed out waiting for action")
            .unwrap();
        assert_eq!(received, action);
        assert_eq!(second.recv().await.unwrap(), action);
    }

    #[test]
    fn test_broadcast_without_subscribers_does_not_panic() {
        let dispatcher = BroadcastDispatcher::new(4);
        dispatcher.dispatch(EditorAction::DeleteReusableBlock { reusable_id: None });
        assert_eq!(dispatcher.subscriber_count(), 0);
    }
}

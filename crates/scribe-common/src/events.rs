use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::state::Panel;
use crate::status::EditorStatus;

/// Discrete notifications about bridge activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BridgeEvent {
    ChannelMounted,
    ChannelUnmounted,
    StatusUpdated(EditorStatus),
    PanelChanged(Panel),
    ContentPushed,
    ContentReceived,
    ProtocolError(String),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<BridgeEvent>,
}

impl EventBus {
    /// `capacity` is clamped to at least one slot.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BridgeEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers reached; zero is not an error.
    pub fn publish(&self, event: BridgeEvent) -> usize {
        tracing::trace!(?event, "bridge event");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

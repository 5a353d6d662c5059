//! Read-only access to bridge state for UI consumers.

use scribe_common::{BridgeError, BridgeState};
use tokio::sync::watch;

/// A subscriber's view of the controller's [`BridgeState`].
///
/// Only the controller can change the state; receivers read the latest
/// snapshot or wait for the next change.
#[derive(Debug, Clone)]
pub struct StateReceiver {
    rx: watch::Receiver<BridgeState>,
}

impl StateReceiver {
    pub(crate) fn new(rx: watch::Receiver<BridgeState>) -> Self {
        Self { rx }
    }

    /// Clone of the latest state.
    pub fn current(&self) -> BridgeState {
        self.rx.borrow().clone()
    }

    /// Project one value out of the latest state.
    pub fn select<T>(&self, f: impl FnOnce(&BridgeState) -> T) -> T {
        f(&self.rx.borrow())
    }

    /// Whether the state changed since this receiver last looked.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Latest state, marking it as seen.
    pub fn take(&mut self) -> BridgeState {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next change. Fails with `ChannelClosed` once the
    /// controller is gone.
    pub async fn changed(&mut self) -> Result<(), BridgeError> {
        self.rx
            .changed()
            .await
            .map_err(|_| BridgeError::ChannelClosed)
    }
}

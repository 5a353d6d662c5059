//! Graceful shutdown: detach the bridge, drop the WebView, stop the runtime.

use std::time::Duration;

use super::core::ScribeApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ScribeApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// The bridge is unmounted first so an outstanding content request
    /// fails with `ChannelClosed` instead of waiting on a dead WebView.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.bridge.unmount();
        self.editor = None;
        self.webviews = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

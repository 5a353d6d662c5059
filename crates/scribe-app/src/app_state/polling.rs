//! Polling for WebView events and bridge timers.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::ScribeApp;
use super::types::POLL_INTERVAL;

impl ScribeApp {
    /// Run polling and schedule the next wake-up.
    ///
    /// Sleeps until the earlier of the next poll tick and the bridge's
    /// keyboard debounce deadline.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }
        self.bridge.poll_timers(now);

        if self.bridge_state.has_changed() {
            self.update_window_title();
        }

        let next_poll = self.last_poll + POLL_INTERVAL;
        let wake = match self.bridge.next_deadline() {
            Some(deadline) => deadline.min(next_poll),
            None => next_poll,
        };
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }
}

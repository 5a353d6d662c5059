//! Shared constants for the app state modules.

use std::time::Duration;

/// Upper bound on how long the loop sleeps before draining WebView events.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// How long a Ctrl+G content fetch waits for the engine.
pub(super) const CONTENT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

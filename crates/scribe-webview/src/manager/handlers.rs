use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for editor navigation.
///
/// - `scribe://`: custom protocol for the bundled engine page
/// - `http://scribe.localhost`: WebView2's rewrite of `scribe://`
/// - `about:blank`: default empty page
/// - CDN origins the engine page loads its scripts from
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "scribe://",
    "http://scribe.localhost",
    "about:blank",
    "https://cdn.jsdelivr.net/",
    "https://unpkg.com/",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        // Bodies are queued as-is; decoding and rejection happen in the
        // bridge so malformed messages surface as protocol errors.
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();
            debug!(body_len = body.len(), "IPC message from engine");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }

            debug!(url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationRequested { url });
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_scribe_protocol() {
        assert!(is_navigation_allowed("scribe://localhost/editor.html"));
        assert!(is_navigation_allowed("http://scribe.localhost/editor.html"));
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn allows_cdn_origins() {
        assert!(is_navigation_allowed(
            "https://cdn.jsdelivr.net/npm/tinymce@6/tinymce.min.js"
        ));
        assert!(is_navigation_allowed("https://unpkg.com/tinymce@6/tinymce.min.js"));
    }

    #[test]
    fn blocks_everything_else() {
        assert!(!is_navigation_allowed("https://evil.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("data:text/html,<h1>x</h1>"));
        assert!(!is_navigation_allowed(""));
    }
}

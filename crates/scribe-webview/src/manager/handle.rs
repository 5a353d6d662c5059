use scribe_common::ChannelError;
use wry::WebView;

use crate::channel::EngineChannel;

/// Handle to the editor WebView. This is the engine channel the bridge
/// controller sends commands through.
pub struct EditorWebView {
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
}

impl EditorWebView {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}

impl EngineChannel for EditorWebView {
    fn send(&self, script: &str) -> Result<(), ChannelError> {
        self.webview
            .evaluate_script(script)
            .map_err(|e| ChannelError::Script(e.to_string()))
    }
}

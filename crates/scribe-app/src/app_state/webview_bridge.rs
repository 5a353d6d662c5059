//! Routes editor WebView events into the bridge controller.

use std::rc::Rc;

use scribe_webview::{PageLoadState, WebViewEvent};

use super::core::ScribeApp;

impl ScribeApp {
    /// Drain queued WebView events and hand them to the bridge.
    pub(super) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::IpcMessage { body } => {
                // Rejections are logged and published by the bridge.
                let _ = self.bridge.on_message(&body);
            }
            WebViewEvent::PageLoad { state, url } => {
                tracing::debug!(?state, url = %url, "Editor page load event");
                match state {
                    PageLoadState::Started => {
                        // A reload tears down the engine; wait for it again.
                        self.bridge.unmount();
                    }
                    PageLoadState::Finished => self.mount_editor(),
                }
            }
            WebViewEvent::NavigationRequested { url } => {
                tracing::debug!(url = %url, "Editor navigation");
            }
            WebViewEvent::Closed => {
                tracing::debug!("Editor WebView closed event");
                self.bridge.unmount();
            }
        }
    }

    /// Hand the loaded editor to the bridge and send the init payload.
    fn mount_editor(&mut self) {
        let Some(editor) = &self.editor else {
            return;
        };
        self.bridge.mount(Rc::clone(editor));

        let editor_config = &self.config.editor;
        self.bridge.initialize(
            &editor_config.initial_content,
            &editor_config.content_style,
            editor_config.placeholder.as_deref(),
        );
    }
}

//! Action dispatch: routes key-bound actions to the bridge.

use super::core::ScribeApp;
use super::keys::EditorAction;
use super::types::CONTENT_FETCH_TIMEOUT;

impl ScribeApp {
    pub(super) fn dispatch(&mut self, action: EditorAction) {
        tracing::debug!(?action, "Dispatching action");
        match action {
            EditorAction::ToggleFormat(format) => self.bridge.toggle_format(format),
            EditorAction::Undo => self.bridge.undo(),
            EditorAction::Redo => self.bridge.redo(),
            EditorAction::ShowFormatPanel => self.bridge.show_format_panel(),
            EditorAction::ShowLinkPanel => self.bridge.show_link_panel(),
            EditorAction::DismissPanels => self.bridge.dismiss_panels(),
            EditorAction::FetchContent => self.fetch_content(),
        }
    }

    /// Request the document and log it once the engine answers.
    fn fetch_content(&mut self) {
        let Some(rt) = &self.tokio_runtime else {
            tracing::warn!("Content fetch unavailable: no async runtime");
            return;
        };

        let request = match self.bridge.get_content() {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Content fetch not started");
                return;
            }
        };

        let request_id = request.id().clone();
        rt.spawn(async move {
            match request.with_timeout(CONTENT_FETCH_TIMEOUT).await {
                Ok(html) => tracing::info!(
                    request_id = %request_id,
                    content_len = html.len(),
                    "Editor content:\n{html}"
                ),
                Err(e) => tracing::warn!(request_id = %request_id, error = %e, "Content fetch failed"),
            }
        });
    }
}

use std::sync::Arc;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::request_path;
use crate::content::ContentProvider;
use crate::script::ENGINE_GLUE_SCRIPT;

use super::handle::EditorWebView;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the editor WebView as a child of the given window.
    ///
    /// The engine glue is installed as an initialization script, so it is
    /// in place before the engine page runs. The bridge treats the channel
    /// as ready once `PageLoadState::Finished` is observed.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<EditorWebView, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_initialization_script(ENGINE_GLUE_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events));
        builder = self.attach_custom_protocol(builder);
        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, "editor WebView created");

        Ok(EditorWebView {
            webview,
            current_url: config.url,
        })
    }

    /// Set the content provider serving `scribe://` requests.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol("scribe".to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);

                let response = match cp.resolve(path) {
                    Some((mime, data)) => wry::http::Response::builder()
                        .status(200)
                        .header("Content-Type", mime)
                        .header("Access-Control-Allow-Origin", "scribe://localhost")
                        .body(std::borrow::Cow::from(data)),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        wry::http::Response::builder()
                            .status(404)
                            .body(std::borrow::Cow::from(b"Not Found".to_vec()))
                    }
                };
                response.unwrap_or_else(|e| {
                    warn!(error = %e, "custom protocol: failed to build response");
                    wry::http::Response::new(std::borrow::Cow::from(Vec::new()))
                })
            });
        }
        builder
    }
}

//! Window creation and editor WebView setup.

use std::rc::Rc;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use scribe_webview::{ContentProvider, WebViewConfig, WebViewManager};

use super::core::ScribeApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ScribeApp {
    /// Create the window, the async runtime and the editor WebView.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Scribe")
            .with_inner_size(winit::dpi::LogicalSize::new(900.0, 700.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        // IME enable/disable is the desktop stand-in for the on-screen
        // keyboard appearing and disappearing.
        window.set_ime_allowed(true);

        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => self.tokio_runtime = Some(rt),
            Err(e) => tracing::warn!("Failed to start async runtime, content fetch disabled: {e}"),
        }

        self.window = Some(window);
        self.initialize_webview();
        if self.editor.is_none() {
            return false;
        }

        tracing::info!("Window created and editor WebView initialized");
        true
    }

    /// Build the editor WebView serving the engine page over `scribe://`.
    fn initialize_webview(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let assets_path = std::env::current_dir()
            .unwrap_or_default()
            .join(&self.config.webview.assets_dir);
        if !assets_path.is_dir() {
            tracing::warn!(
                path = %assets_path.display(),
                "Assets directory not found, the editor page will not load"
            );
        }

        let mut manager = WebViewManager::new();
        manager.set_content_provider(ContentProvider::new(&assets_path));

        let mut config = WebViewConfig::with_url(self.config.webview.entry_url());
        config.devtools |= self.config.webview.devtools;
        if let Some(ua) = &self.config.webview.user_agent {
            config.user_agent = Some(ua.clone());
        }

        let bounds = self.window_bounds();
        match manager.create(window.as_ref(), bounds, config) {
            Ok(editor) => {
                tracing::info!(
                    url = %editor.current_url(),
                    assets_dir = %assets_path.display(),
                    "Editor WebView created"
                );
                self.editor = Some(Rc::new(editor));
            }
            Err(e) => tracing::error!(error = %e, "Failed to create editor WebView"),
        }
        self.webviews = Some(manager);
    }

    /// The whole client area, in logical coordinates.
    pub(super) fn window_bounds(&self) -> wry::Rect {
        let size = match &self.window {
            Some(w) => w.inner_size().to_logical::<f64>(w.scale_factor()),
            None => winit::dpi::LogicalSize::new(0.0, 0.0),
        };
        wry::Rect {
            position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
            size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(size.width, size.height)),
        }
    }

    /// Keep the editor filling the window.
    pub(super) fn sync_webview_bounds(&self) {
        let Some(editor) = &self.editor else {
            return;
        };
        if let Err(e) = editor.set_bounds(self.window_bounds()) {
            tracing::warn!(error = %e, "Failed to resize editor WebView");
        }
    }
}

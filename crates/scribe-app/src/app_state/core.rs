//! ScribeApp struct definition and constructor.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use scribe_bridge::{BridgeController, BridgeOptions, StateReceiver};
use scribe_config::ScribeConfig;
use scribe_webview::{EditorWebView, WebViewManager};

/// Top-level application state.
pub struct ScribeApp {
    pub(super) config: ScribeConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Editor WebView. Shared with the bridge while mounted.
    pub(super) webviews: Option<WebViewManager>,
    pub(super) editor: Option<Rc<EditorWebView>>,

    pub(super) bridge: BridgeController<Rc<EditorWebView>>,
    pub(super) bridge_state: StateReceiver,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Awaits content requests off the UI thread.
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ScribeApp {
    pub fn new(config: ScribeConfig) -> Self {
        let bridge = BridgeController::new(BridgeOptions::from_config(&config));
        let bridge_state = bridge.subscribe();
        Self {
            config,
            window: None,
            webviews: None,
            editor: None,
            bridge,
            bridge_state,
            modifiers: winit::keyboard::ModifiersState::empty(),
            tokio_runtime: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

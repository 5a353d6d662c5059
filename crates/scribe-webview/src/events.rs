//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded; the engine glue is in place.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the editor WebView, queued for the host loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad { state: PageLoadState, url: String },
    /// A raw IPC body posted by the engine page.
    IpcMessage { body: String },
    NavigationRequested { url: String },
    Closed,
}

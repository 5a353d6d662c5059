//! Message channel between the host and the embedded editor engine.
//!
//! Wraps the `wry` crate to provide:
//! - The engine -> host wire protocol (`protocol`)
//! - Host -> engine commands rendered as injected scripts (`script`)
//! - The `EngineChannel` seam the bridge controller talks through
//! - A managed editor WebView with IPC, navigation allowlist and the
//!   `scribe://` custom protocol for the bundled engine page

pub mod channel;
pub mod content;
pub mod events;
pub mod manager;
pub mod protocol;
pub mod script;

pub use channel::EngineChannel;
pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use manager::{EditorWebView, WebViewConfig, WebViewManager};
pub use protocol::{EditorEvent, Envelope};
pub use script::{EngineCommand, InitPayload, ENGINE_GLUE_SCRIPT};

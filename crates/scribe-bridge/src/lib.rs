//! Bridge between a host UI and the embedded rich-text engine.
//!
//! The host owns one [`BridgeController`] per editing session. Commands go
//! out through an [`EngineChannel`](scribe_webview::EngineChannel) as
//! fire-and-forget scripts; engine messages come back through
//! [`BridgeController::on_message`] and are folded into the
//! [`BridgeState`](scribe_common::BridgeState) that toolbars render from.
//!
//! Everything runs on the host's single UI thread. The only suspension
//! point is awaiting a [`ContentRequest`].

pub mod commands;
pub mod controller;
pub mod keyboard;
pub mod pending;
pub mod subscription;
pub mod toolbar;

pub use controller::{BridgeController, BridgeOptions};
pub use keyboard::{KeyboardDebouncer, DEFAULT_KEYBOARD_DEBOUNCE};
pub use pending::ContentRequest;
pub use subscription::StateReceiver;
pub use toolbar::PanelInput;

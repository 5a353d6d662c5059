//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the editor WebView and the bridge
//! controller, and routes input between them.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod keys;
mod polling;
mod shutdown;
mod title;
mod types;
mod webview_bridge;

pub use core::ScribeApp;

//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod editor;
mod keyboard;
mod system;
mod webview;

pub use editor::*;
pub use keyboard::*;
pub use system::*;
pub use webview::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribeConfig {
    pub editor: EditorConfig,
    pub keyboard: KeyboardConfig,
    pub webview: WebViewSection,
    pub logging: LoggingConfig,
}

//! Editor WebView configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSection {
    /// Enable devtools. Always on in debug builds.
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Directory served over `scribe://`, relative to the working directory.
    pub assets_dir: String,
    /// Engine page inside `assets_dir`.
    pub entry: String,
}

impl Default for WebViewSection {
    fn default() -> Self {
        Self {
            devtools: false,
            user_agent: None,
            assets_dir: "assets".into(),
            entry: "editor.html".into(),
        }
    }
}

impl WebViewSection {
    /// `scribe://` URL of the engine page.
    pub fn entry_url(&self) -> String {
        format!("scribe://localhost/{}", self.entry.trim_start_matches('/'))
    }
}

/// Entry page of the bundled engine, served over `scribe://`.
pub const DEFAULT_EDITOR_URL: &str = "scribe://localhost/editor.html";

/// Configuration for creating the editor WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Page hosting the editor engine.
    pub url: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_EDITOR_URL.to_string(),
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Scribe/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a specific engine page.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

//! Local content serving via custom protocol.
//!
//! Registers a `scribe://` custom protocol so the editor webview can load
//! the bundled engine page (HTML/JS/CSS) without a local HTTP server.

use std::path::{Path, PathBuf};

/// Serves local files from a base directory via custom protocol.
///
/// A request for `scribe://localhost/editor.html` resolves to
/// `{base_dir}/editor.html`.
pub struct ContentProvider {
    base_dir: PathBuf,
}

impl ContentProvider {
    /// Create a new content provider rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let clean = path.trim_start_matches('/');

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the root.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((mime, data))
    }
}

/// Strip the `scribe://` scheme (or the WebView2 rewrite of it) from a URI.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("scribe://localhost/")
        .or_else(|| uri.strip_prefix("scribe://localhost"))
        .or_else(|| uri.strip_prefix("http://scribe.localhost/"))
        .or_else(|| uri.strip_prefix("scribe:///"))
        .or_else(|| uri.strip_prefix("scribe://"))
        .unwrap_or("")
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

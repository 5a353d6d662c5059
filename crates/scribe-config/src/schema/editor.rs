//! Editor content configuration.

use serde::{Deserialize, Serialize};

/// Values handed to the engine at initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Markup the editor opens with.
    pub initial_content: String,
    /// CSS applied inside the editing surface.
    pub content_style: String,
    /// Placeholder shown while the document is empty.
    pub placeholder: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_content: String::new(),
            content_style: "body { font-family: sans-serif; }".into(),
            placeholder: None,
        }
    }
}

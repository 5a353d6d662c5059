//! Host-owned bridge state: the single source of truth for toolbar UI.

use serde::{Deserialize, Serialize};

use crate::status::EditorStatus;

/// Which toolbar surface is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// The default toolbar.
    #[default]
    Default,
    /// The formatting panel.
    Format,
    /// The link panel.
    Link,
}

/// Snapshot of everything the host UI renders from.
///
/// The visible panel is stored as one value, so the format and link
/// panels can never both be showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BridgeState {
    /// Last content pushed into the engine. Opaque markup.
    pub content: String,
    /// Latest status reported by the engine.
    pub text_status: EditorStatus,
    pub panel: Panel,
}

impl BridgeState {
    pub fn showing_format(&self) -> bool {
        self.panel == Panel::Format
    }

    pub fn showing_link(&self) -> bool {
        self.panel == Panel::Link
    }
}

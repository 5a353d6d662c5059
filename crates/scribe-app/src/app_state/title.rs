//! Window title management: mirrors the toolbar state.

use scribe_bridge::commands::INLINE_FORMATS;
use scribe_common::{BridgeState, Panel};

use super::core::ScribeApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

impl ScribeApp {
    /// Update the window title from the latest bridge state.
    ///
    /// Format: "Scribe - {panel} [{active formats}] {paragraph type}"
    pub(super) fn update_window_title(&mut self) {
        let state = self.bridge_state.take();
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&title_for(&state));
    }
}

fn title_for(state: &BridgeState) -> String {
    let panel = match state.panel {
        Panel::Default => "editing",
        Panel::Format => "format panel",
        Panel::Link => "link panel",
    };
    let status = &state.text_status;
    let active: Vec<&str> = INLINE_FORMATS
        .into_iter()
        .filter(|f| status.is_format_active(f))
        .collect();

    let mut title = format!("Scribe - {panel}");
    if !active.is_empty() {
        title.push_str(&format!(" [{}]", active.join(" ")));
    }
    title.push(' ');
    title.push_str(status.para_type.as_str());
    title
}

// =============================================================================
// TESTS
// =============================================================================

//! Toolbar/panel state machine.
//!
//! ```text
//!            ShowFormat              ShowLink
//!   Default ────────────► Format   Default ──────────► Link
//!      ▲                    │          ▲                 │
//!      └── Dismiss ─────────┤          └── Dismiss ──────┘
//!      └── KeyboardSettled ─┘
//! ```
//!
//! `KeyboardSettled` only collapses the format panel. The link panel stays
//! open across keyboard shows.

use scribe_common::Panel;

/// Inputs that move the toolbar between panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    ShowFormat,
    ShowLink,
    Dismiss,
    /// The debounced keyboard-show timer fired.
    KeyboardSettled,
}

/// Next panel for `input` in state `current`.
pub fn transition(current: Panel, input: PanelInput) -> Panel {
    match (current, input) {
        (_, PanelInput::ShowFormat) => Panel::Format,
        (_, PanelInput::ShowLink) => Panel::Link,
        (_, PanelInput::Dismiss) => Panel::Default,
        (Panel::Format, PanelInput::KeyboardSettled) => Panel::Default,
        (other, PanelInput::KeyboardSettled) => other,
    }
}

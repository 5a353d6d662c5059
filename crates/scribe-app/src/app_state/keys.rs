//! Key bindings for the demo host.

use winit::keyboard::{Key, ModifiersState, NamedKey};

/// Host-level editor actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EditorAction {
    ToggleFormat(&'static str),
    Undo,
    Redo,
    ShowFormatPanel,
    ShowLinkPanel,
    DismissPanels,
    FetchContent,
}

/// Map a pressed key to its action. `Escape` needs no modifier; every
/// other binding needs Ctrl (Cmd on macOS).
pub(super) fn action_for_key(key: &Key, mods: ModifiersState) -> Option<EditorAction> {
    if let Key::Named(NamedKey::Escape) = key {
        return Some(EditorAction::DismissPanels);
    }

    let primary = if cfg!(target_os = "macos") {
        mods.super_key()
    } else {
        mods.control_key()
    };
    if !primary || mods.alt_key() {
        return None;
    }

    let Key::Character(c) = key else {
        return None;
    };
    let action = match c.to_ascii_lowercase().as_str() {
        "b" => EditorAction::ToggleFormat("bold"),
        "i" => EditorAction::ToggleFormat("italic"),
        "u" => EditorAction::ToggleFormat("underline"),
        "z" if mods.shift_key() => EditorAction::Redo,
        "z" => EditorAction::Undo,
        "y" => EditorAction::Redo,
        "e" => EditorAction::ShowFormatPanel,
        "k" => EditorAction::ShowLinkPanel,
        "g" => EditorAction::FetchContent,
        _ => return None,
    };
    Some(action)
}

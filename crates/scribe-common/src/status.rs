//! Formatting status reported by the engine for the current selection.

use serde::{Deserialize, Serialize};

/// Block type of the paragraph holding the selection.
///
/// Exactly one is active at a time. The engine glue reports list blocks by
/// their uppercase tag names, so `UL` / `OL` are accepted on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParaType {
    #[default]
    P,
    Blockquote,
    H1,
    H2,
    Pre,
    #[serde(alias = "UL")]
    Ul,
    #[serde(alias = "OL")]
    Ol,
}

impl ParaType {
    pub const ALL: [ParaType; 7] = [
        ParaType::P,
        ParaType::Blockquote,
        ParaType::H1,
        ParaType::H2,
        ParaType::Pre,
        ParaType::Ul,
        ParaType::Ol,
    ];

    /// Engine format name for this block type.
    pub fn as_str(self) -> &'static str {
        match self {
            ParaType::P => "p",
            ParaType::Blockquote => "blockquote",
            ParaType::H1 => "h1",
            ParaType::H2 => "h2",
            ParaType::Pre => "pre",
            ParaType::Ul => "ul",
            ParaType::Ol => "ol",
        }
    }
}

/// Undo/redo availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UndoState {
    pub has_undo: bool,
    pub has_redo: bool,
}

/// Latest formatting state of the selection. Each engine update replaces
/// the previous value wholesale.
///
/// Missing fields fall back to their defaults; the engine does not always
/// report `undo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorStatus {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub para_type: ParaType,
    pub undo: UndoState,
}

impl EditorStatus {
    /// Whether an inline format is active, by its engine format name.
    /// Unknown names are never active.
    pub fn is_format_active(&self, format: &str) -> bool {
        match format {
            "bold" => self.bold,
            "italic" => self.italic,
            "underline" => self.underline,
            "strikethrough" => self.strikethrough,
            _ => false,
        }
    }
}

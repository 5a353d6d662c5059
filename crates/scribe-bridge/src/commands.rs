//! Engine command identifiers used by the convenience operations.

use scribe_common::ParaType;

pub const TOGGLE_FORMAT: &str = "mceToggleFormat";
pub const UNDO: &str = "Undo";
pub const REDO: &str = "Redo";
pub const INSERT_LINK: &str = "mceInsertLink";
pub const UNLINK: &str = "unlink";
pub const INSERT_UNORDERED_LIST: &str = "InsertUnorderedList";
pub const INSERT_ORDERED_LIST: &str = "InsertOrderedList";

/// Inline formats the engine reports status for.
pub const INLINE_FORMATS: [&str; 4] = ["bold", "italic", "underline", "strikethrough"];

/// Command and value that switch the current block to `para`.
///
/// Lists have dedicated commands; every other block type is a format
/// toggled by name.
pub fn paragraph_command(para: ParaType) -> (&'static str, Option<&'static str>) {
    match para {
        ParaType::Ul => (INSERT_UNORDERED_LIST, None),
        ParaType::Ol => (INSERT_ORDERED_LIST, None),
        other => (TOGGLE_FORMAT, Some(other.as_str())),
    }
}

//! Rich-text editor buffer and toolbar actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor is a `contenteditable` region. Toolbar buttons map to document
//! editing commands; the resulting HTML is written to `richTextData` on every
//! change and read back on mount.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::config::RICH_TEXT_KEY;
use crate::storage::{KeyValueStore, StorageError};

/// Formatting applied from the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatAction {
    Heading1,
    Heading2,
    Paragraph,
    Bold,
    Italic,
    Underline,
    OrderedList,
    BulletList,
    Clean,
}

/// A document editing command name plus its optional value argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditCommand {
    pub name: &'static str,
    pub value: Option<&'static str>,
}

impl FormatAction {
    /// Toolbar order, grouped as headers, inline, lists, clean.
    pub const ALL: [FormatAction; 9] = [
        FormatAction::Heading1,
        FormatAction::Heading2,
        FormatAction::Paragraph,
        FormatAction::Bold,
        FormatAction::Italic,
        FormatAction::Underline,
        FormatAction::OrderedList,
        FormatAction::BulletList,
        FormatAction::Clean,
    ];

    #[must_use]
    pub fn command(self) -> EditCommand {
        let (name, value) = match self {
            FormatAction::Heading1 => ("formatBlock", Some("h1")),
            FormatAction::Heading2 => ("formatBlock", Some("h2")),
            FormatAction::Paragraph => ("formatBlock", Some("p")),
            FormatAction::Bold => ("bold", None),
            FormatAction::Italic => ("italic", None),
            FormatAction::Underline => ("underline", None),
            FormatAction::OrderedList => ("insertOrderedList", None),
            FormatAction::BulletList => ("insertUnorderedList", None),
            FormatAction::Clean => ("removeFormat", None),
        };
        EditCommand { name, value }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormatAction::Heading1 => "H1",
            FormatAction::Heading2 => "H2",
            FormatAction::Paragraph => "Normal",
            FormatAction::Bold => "B",
            FormatAction::Italic => "I",
            FormatAction::Underline => "U",
            FormatAction::OrderedList => "1.",
            FormatAction::BulletList => "•",
            FormatAction::Clean => "Clear",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            FormatAction::Heading1 => "Heading 1",
            FormatAction::Heading2 => "Heading 2",
            FormatAction::Paragraph => "Normal text",
            FormatAction::Bold => "Bold",
            FormatAction::Italic => "Italic",
            FormatAction::Underline => "Underline",
            FormatAction::OrderedList => "Numbered list",
            FormatAction::BulletList => "Bulleted list",
            FormatAction::Clean => "Remove formatting",
        }
    }
}

/// Saved editor HTML, empty when nothing has been stored.
pub fn load_content(store: &dyn KeyValueStore) -> Result<String, StorageError> {
    Ok(store.get(RICH_TEXT_KEY)?.unwrap_or_default())
}

pub fn save_content(store: &dyn KeyValueStore, html: &str) -> Result<(), StorageError> {
    store.set(RICH_TEXT_KEY, html)
}

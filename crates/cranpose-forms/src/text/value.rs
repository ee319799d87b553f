use super::{char_len, TextRange};

/// Immutable snapshot of text field content.
///
/// This is both what a field currently shows and what the host input surface
/// hands over after an edit (the raw text plus where the selection ended up).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldValue {
    /// The text content
    pub text: String,
    /// Current selection or cursor position
    pub selection: TextRange,
}

impl TextFieldValue {
    /// Creates a new value with the given text and cursor at end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = char_len(&text);
        Self {
            text,
            selection: TextRange::cursor(len),
        }
    }

    /// Creates a value with specified text and selection.
    pub fn with_selection(text: impl Into<String>, selection: TextRange) -> Self {
        let text = text.into();
        let selection = selection.coerce_in(char_len(&text));
        Self { text, selection }
    }

    /// Length of the text in chars.
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Returns true when the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns a copy whose selection is clamped into `[0, len]`.
    pub fn clamped(&self) -> Self {
        Self {
            text: self.text.clone(),
            selection: self.selection.coerce_in(self.len()),
        }
    }
}

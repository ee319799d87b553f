//! Fixed-length numeric code entry (SMS / PIN codes shown as dots).

use crate::state::FormFieldState;
use crate::text::{char_len, TextFieldValue};

/// Default number of code digits.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Accepts up to `count` digits into a [`FormFieldState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    count: usize,
}

impl Default for CodeEntry {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeEntry {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Limits `state` to the code length.
    pub fn attach(&self, state: &FormFieldState) {
        state.set_max_length(self.count);
    }

    /// Commits the digits of `edited` unless the edit is longer than the
    /// code. Returns true when the edit was taken.
    pub fn on_value_change(&self, state: &FormFieldState, edited: TextFieldValue) -> bool {
        if char_len(&edited.text) > self.count {
            log::trace!("code entry ignored {:?}: longer than {}", edited.text, self.count);
            return false;
        }
        let text: String = edited.text.chars().filter(char::is_ascii_digit).collect();
        state.set_text(TextFieldValue {
            text,
            selection: edited.selection,
        });
        true
    }

    /// Cursor goes to the end when the entry gains focus.
    pub fn on_focus_changed(&self, state: &FormFieldState, focused: bool) {
        if focused {
            state.position_to_end();
        }
    }

    /// Number of filled positions.
    pub fn filled(&self, state: &FormFieldState) -> usize {
        char_len(&state.value()).min(self.count)
    }

    pub fn is_complete(&self, state: &FormFieldState) -> bool {
        self.filled(state) == self.count
    }

    /// Clears the entry, e.g. after the code was rejected.
    pub fn reset(&self, state: &FormFieldState) {
        state.set_value("");
    }
}

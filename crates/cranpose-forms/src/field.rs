//! Edit pipeline of a text form field.
//!
//! Every edit coming from the input surface runs through the same steps
//! before it reaches [`FormFieldState`]:
//!
//! 1. allowed-character filter (mask literals always pass),
//! 2. max length,
//! 3. the mask engine, or plain assignment when the field has no mask.
//!
//! [`FormField`] also tracks the bits of focus and edit history that decide
//! when an error should be shown.

use crate::mask::{apply_mask, Mask};
use crate::state::FormFieldState;
use crate::text::{char_len, take_chars, TextFieldValue};

/// Filters applied to each edit of a field.
#[derive(Debug, Clone)]
pub struct FieldFilters {
    /// Characters accepted from input; `None` accepts everything.
    pub allowed_chars: Option<String>,
    /// Maximum text length in chars.
    pub max_length: usize,
    /// Positional mask, if the field is masked.
    pub mask: Option<Mask>,
    /// Blank out a field holding only the mask prefix when it is unfocused.
    pub clear_start_unfocused: bool,
}

impl Default for FieldFilters {
    fn default() -> Self {
        Self {
            allowed_chars: None,
            max_length: usize::MAX,
            mask: None,
            clear_start_unfocused: false,
        }
    }
}

impl FieldFilters {
    /// Filters for a Russian phone field: [`Mask::ru_phone`], digits only,
    /// prefix cleared when unfocused.
    pub fn ru_phone() -> Self {
        Self::default()
            .with_mask(Mask::ru_phone())
            .with_allowed_chars("0123456789")
            .with_clear_start_unfocused(true)
    }

    pub fn with_allowed_chars(mut self, chars: impl Into<String>) -> Self {
        self.allowed_chars = Some(chars.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_clear_start_unfocused(mut self, clear: bool) -> Self {
        self.clear_start_unfocused = clear;
        self
    }

    fn accepts(&self, c: char) -> bool {
        match &self.allowed_chars {
            Some(allowed) => {
                allowed.contains(c) || self.mask.as_ref().is_some_and(|m| m.contains_literal(c))
            }
            None => true,
        }
    }

    /// Runs the pipeline for one edit and returns the value to commit.
    pub fn apply(
        &self,
        prior: &TextFieldValue,
        edited: TextFieldValue,
        is_focused: bool,
    ) -> TextFieldValue {
        let mut value = edited;
        if self.allowed_chars.is_some() {
            value.text = value.text.chars().filter(|&c| self.accepts(c)).collect();
        }
        if char_len(&value.text) > self.max_length {
            value.text = take_chars(&value.text, self.max_length).to_owned();
        }
        match &self.mask {
            Some(mask) => apply_mask(mask, prior, &value, is_focused, self.clear_start_unfocused),
            None => value.clamped(),
        }
    }
}

/// A form field: shared state, its filters and focus bookkeeping.
#[derive(Debug, Clone)]
pub struct FormField {
    state: FormFieldState,
    filters: FieldFilters,
    is_focused: bool,
    is_changed: bool,
    is_fix_error: bool,
    is_validate_requested: bool,
}

impl FormField {
    pub fn new(state: FormFieldState, filters: FieldFilters) -> Self {
        Self {
            state,
            filters,
            is_focused: false,
            is_changed: false,
            is_fix_error: false,
            is_validate_requested: false,
        }
    }

    pub fn state(&self) -> &FormFieldState {
        &self.state
    }

    pub fn filters(&self) -> &FieldFilters {
        &self.filters
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Handles an edit from the input surface.
    pub fn on_value_change(&mut self, edited: TextFieldValue) {
        let prior = self.state.text();
        let next = self.filters.apply(&prior, edited, self.is_focused);
        self.state.set_text(next);
        self.is_fix_error = false;
        self.is_changed = true;
        self.is_validate_requested = false;
    }

    /// Handles a focus change by re-applying the mask to the current value.
    ///
    /// Gaining focus moves the cursor past the mask prefix. Losing focus
    /// blanks a field that shows only the prefix when
    /// [`FieldFilters::clear_start_unfocused`] is set.
    pub fn on_focus_changed(&mut self, focused: bool) {
        self.is_focused = focused;
        if let Some(mask) = &self.filters.mask {
            let current = self.state.text();
            let next = apply_mask(
                mask,
                &current,
                &current,
                focused,
                self.filters.clear_start_unfocused,
            );
            self.state.set_text(next);
        }
        if !focused && self.state.has_errors() {
            self.is_fix_error = true;
        }
    }

    /// Marks the field as submitted; errors show regardless of focus until
    /// the next edit.
    pub fn request_validation(&mut self) {
        self.is_validate_requested = true;
        self.state.validate();
    }

    /// Whether the field should currently display its error.
    pub fn is_error(&self) -> bool {
        let has_errors = self.state.has_errors();
        (self.is_validate_requested && has_errors)
            || ((!self.is_focused || self.is_fix_error) && has_errors && self.is_changed)
    }
}

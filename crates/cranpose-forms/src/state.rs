//! State holder for a single form field.
//!
//! `FormFieldState` owns what the field shows (text plus selection) and the
//! validation outcome for it. The validation rules themselves are supplied by
//! the caller; this crate only defines the contract.

use crate::text::{char_len, take_chars, TextFieldValue};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A validation problem reported for a field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldError {
    message: Cow<'static, str>,
}

impl FieldError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

/// Errors collected for one value; fields rarely report more than two.
pub type FieldErrors = SmallVec<[FieldError; 2]>;

type CheckValid = Rc<dyn Fn(&str) -> FieldErrors>;
type ChangeListener = Rc<dyn Fn(&TextFieldValue)>;

struct FormFieldStateInner {
    value: TextFieldValue,
    errors: FieldErrors,
    check_valid: Option<CheckValid>,
    max_length: Option<usize>,
    listeners: Vec<ChangeListener>,
}

impl FormFieldStateInner {
    fn recheck(&mut self) {
        self.errors = match &self.check_valid {
            Some(check) => check(&self.value.text),
            None => FieldErrors::new(),
        };
    }
}

/// Observable state of a form field.
///
/// Clones share the same state, so the host surface and the screen logic can
/// each hold a handle.
///
/// # Thread Safety
///
/// Uses `Rc<RefCell<...>>` internally and is not thread-safe. Edits arrive
/// from the UI thread's serialized event dispatch.
#[derive(Clone)]
pub struct FormFieldState {
    inner: Rc<RefCell<FormFieldStateInner>>,
}

impl fmt::Debug for FormFieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FormFieldState")
            .field("text", &inner.value.text)
            .field("selection", &inner.value.selection)
            .field("errors", &inner.errors)
            .finish()
    }
}

impl FormFieldState {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::with_value("")
    }

    /// Creates a field pre-seeded with `initial`, cursor at end.
    ///
    /// Masked phone fields are commonly seeded with the mask prefix
    /// (`"+7 "`).
    pub fn with_value(initial: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FormFieldStateInner {
                value: TextFieldValue::new(initial),
                errors: FieldErrors::new(),
                check_valid: None,
                max_length: None,
                listeners: Vec::new(),
            })),
        }
    }

    /// Installs the validation check and runs it on the current value.
    pub fn with_validator(self, check: impl Fn(&str) -> FieldErrors + 'static) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            inner.check_valid = Some(Rc::new(check));
            inner.recheck();
        }
        self
    }

    /// Plain text of the field.
    pub fn value(&self) -> String {
        self.inner.borrow().value.text.clone()
    }

    /// Replaces the text and places the cursor at the end.
    pub fn set_value(&self, text: impl Into<String>) {
        self.set_text(TextFieldValue::new(text));
    }

    /// Rendered value with selection.
    pub fn text(&self) -> TextFieldValue {
        self.inner.borrow().value.clone()
    }

    /// Replaces text and selection, clamping the selection into the text.
    pub fn set_text(&self, value: TextFieldValue) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let mut value = value;
            if let Some(max) = inner.max_length {
                if char_len(&value.text) > max {
                    value.text = take_chars(&value.text, max).to_owned();
                }
            }
            let value = value.clamped();
            if value == inner.value {
                false
            } else {
                let text_changed = value.text != inner.value.text;
                inner.value = value;
                if text_changed {
                    inner.recheck();
                }
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Moves the cursor to the end of the text.
    pub fn position_to_end(&self) {
        let text = self.value();
        self.set_text(TextFieldValue::new(text));
    }

    /// Limits later values to `max` chars and truncates the current one.
    pub fn set_max_length(&self, max: usize) {
        self.inner.borrow_mut().max_length = Some(max);
        self.set_text(self.text());
    }

    pub fn max_length(&self) -> Option<usize> {
        self.inner.borrow().max_length
    }

    /// Errors for the current value.
    pub fn errors(&self) -> FieldErrors {
        self.inner.borrow().errors.clone()
    }

    pub fn first_error(&self) -> Option<FieldError> {
        self.inner.borrow().errors.first().cloned()
    }

    pub fn has_errors(&self) -> bool {
        !self.inner.borrow().errors.is_empty()
    }

    /// Re-runs the validation check; returns true when the value is valid.
    pub fn validate(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.recheck();
        inner.errors.is_empty()
    }

    /// Adds a listener that is called when the value changes.
    ///
    /// Returns the listener index.
    pub fn add_listener(&self, listener: impl Fn(&TextFieldValue) + 'static) -> usize {
        let mut inner = self.inner.borrow_mut();
        let index = inner.listeners.len();
        inner.listeners.push(Rc::new(listener));
        index
    }

    /// Listeners run with no borrow held, so they may write back into the
    /// state.
    fn notify(&self) {
        let value = self.text();
        let listeners = self.inner.borrow().listeners.clone();
        for listener in listeners {
            listener(&value);
        }
    }
}

impl Default for FormFieldState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for FormFieldState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextRange;
    use smallvec::smallvec;
    use std::cell::Cell;

    fn required(target: &str) -> FieldErrors {
        if target.trim().is_empty() {
            smallvec![FieldError::new("required")]
        } else {
            FieldErrors::new()
        }
    }

    #[test]
    fn new_state_is_empty() {
        let state = FormFieldState::new();
        assert_eq!(state.value(), "");
        assert_eq!(state.text(), TextFieldValue::default());
        assert!(!state.has_errors());
    }

    #[test]
    fn seeded_value_has_cursor_at_end() {
        let state = FormFieldState::with_value("+7 ");
        assert_eq!(state.text().selection, TextRange::cursor(3));
    }

    #[test]
    fn set_text_clamps_selection() {
        let state = FormFieldState::new();
        state.set_text(TextFieldValue {
            text: String::new(),
            selection: TextRange::cursor(4),
        });
        assert_eq!(state.text().selection, TextRange::zero());
    }

    #[test]
    fn validator_runs_on_every_text_change() {
        let state = FormFieldState::new().with_validator(required);
        assert!(state.has_errors());
        assert_eq!(state.first_error().unwrap().message(), "required");

        state.set_value("Ann");
        assert!(!state.has_errors());
        assert!(state.validate());

        state.set_value("  ");
        assert!(!state.validate());
        assert_eq!(state.errors().len(), 1);
    }

    #[test]
    fn max_length_truncates() {
        let state = FormFieldState::with_value("1234567");
        state.set_max_length(4);
        assert_eq!(state.value(), "1234");
        state.set_value("98765");
        assert_eq!(state.value(), "9876");
        assert_eq!(state.max_length(), Some(4));
    }

    #[test]
    fn position_to_end_moves_cursor() {
        let state = FormFieldState::new();
        state.set_text(TextFieldValue::with_selection("123", TextRange::zero()));
        state.position_to_end();
        assert_eq!(state.text().selection, TextRange::cursor(3));
    }

    #[test]
    fn listener_is_called_on_change_only() {
        let state = FormFieldState::new();
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        state.add_listener(move |_value| calls_clone.set(calls_clone.get() + 1));

        state.set_value("1");
        state.set_value("1");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn listener_can_write_back_into_state() {
        let state = FormFieldState::new().with_validator(required);
        let handle = state.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        state.add_listener(move |value| {
            seen_clone.borrow_mut().push(value.text.clone());
            if value.text == "x" {
                handle.set_value("y");
                handle.set_max_length(8);
                handle.validate();
            }
        });

        state.set_value("x");
        assert_eq!(state.value(), "y");
        assert_eq!(*seen.borrow(), ["x", "y"]);
        assert!(!state.has_errors());
    }

    #[test]
    fn clones_share_state() {
        let state = FormFieldState::new();
        let other = state.clone();
        other.set_value("shared");
        assert_eq!(state.value(), "shared");
        assert_eq!(state, other);
        assert_ne!(state, FormFieldState::new());
    }
}

//! Positional input masks for form fields.
//!
//! A mask template is a string of literal characters and `#` placeholders,
//! for example `+7 (###) ### ## ##`. Each placeholder takes one digit; every
//! other character is shown as-is. [`apply_mask`] reconciles a raw edit from
//! the input surface against the template and returns the corrected value and
//! selection.
//!
//! Digit literals are supported at the start of the template only (a country
//! code such as the `7` in `+7 (...`); they are treated as part of the value
//! and never typed twice.
//!
//! # Example
//!
//! ```
//! use cranpose_forms::mask::{apply_mask, Mask};
//! use cranpose_forms::text::TextFieldValue;
//!
//! let mask = Mask::ru_phone();
//! let result = apply_mask(
//!     &mask,
//!     &TextFieldValue::default(),
//!     &TextFieldValue::new("89501234568"),
//!     true,
//!     false,
//! );
//! assert_eq!(result.text, "+7 (950) 123 45 68");
//! ```

mod classify;
mod digits;
mod engine;
mod paste;
mod render;

pub use classify::{classify, is_overwrite, EditClass};
pub use digits::extract_digits;
pub use engine::apply_mask;
pub use paste::{is_paste, PastePolicy, RuPhonePaste, VerbatimPaste};
pub use render::{clear_mask_prefix, render, trim_rendered};

use crate::text::char_len;
use std::fmt;
use std::sync::Arc;

/// Placeholder character of a mask template.
pub const PLACEHOLDER: char = '#';

/// Russian mobile phone mask used by the phone field.
pub const RU_PHONE_MASK: &str = "+7 (###) ### ## ##";

/// Errors raised when a mask template cannot drive the mask engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    Empty,
    NoPlaceholder { template: String },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::Empty => write!(f, "mask template is empty"),
            MaskError::NoPlaceholder { template } => {
                write!(f, "mask template {template:?} has no '{PLACEHOLDER}' placeholder")
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// Text before the first placeholder, or the whole template without one.
pub fn prefix_literal(template: &str) -> &str {
    template
        .split_once(PLACEHOLDER)
        .map_or(template, |(prefix, _)| prefix)
}

/// Digit literals baked into the template, in order.
pub fn digit_skeleton(template: &str) -> String {
    extract_digits(template)
}

/// The digit right after a leading `+` (`7` for `+7 (###)...`).
pub fn leading_digit_literal(template: &str) -> Option<char> {
    let mut chars = template.chars();
    match (chars.next(), chars.next()) {
        (Some('+'), Some(digit)) if digit.is_ascii_digit() => Some(digit),
        _ => None,
    }
}

/// A validated mask template with its derived constants.
///
/// Construct it once at configuration time; the engine only reads it. Each
/// mask carries the [`PastePolicy`] used to normalize pasted payloads.
#[derive(Clone)]
pub struct Mask {
    template: String,
    length: usize,
    prefix: String,
    skeleton: String,
    leading_digit: Option<char>,
    placeholders: usize,
    paste: Arc<dyn PastePolicy>,
}

impl Mask {
    /// Validates `template` and derives its constants.
    ///
    /// Templates must be non-empty and contain at least one `#`.
    pub fn new(template: impl Into<String>) -> Result<Self, MaskError> {
        let template = template.into();
        if template.is_empty() {
            return Err(MaskError::Empty);
        }
        if !template.contains(PLACEHOLDER) {
            return Err(MaskError::NoPlaceholder { template });
        }
        Ok(Self::from_valid(template))
    }

    /// [`RU_PHONE_MASK`] with [`RuPhonePaste`] normalization.
    pub fn ru_phone() -> Self {
        Self::from_valid(RU_PHONE_MASK.to_owned()).with_paste_policy(RuPhonePaste)
    }

    fn from_valid(template: String) -> Self {
        Self {
            length: char_len(&template),
            prefix: prefix_literal(&template).to_owned(),
            skeleton: digit_skeleton(&template),
            leading_digit: leading_digit_literal(&template),
            placeholders: template.chars().filter(|&c| c == PLACEHOLDER).count(),
            paste: Arc::new(VerbatimPaste),
            template,
        }
    }

    /// Replaces the paste normalization strategy.
    pub fn with_paste_policy(mut self, policy: impl PastePolicy) -> Self {
        self.paste = Arc::new(policy);
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Template length in chars; the engine never returns longer text.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn prefix_literal(&self) -> &str {
        &self.prefix
    }

    pub fn digit_skeleton(&self) -> &str {
        &self.skeleton
    }

    pub fn leading_digit_literal(&self) -> Option<char> {
        self.leading_digit
    }

    /// Number of `#` slots.
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Digits a complete value holds: skeleton digits plus placeholders.
    pub fn digit_capacity(&self) -> usize {
        char_len(&self.skeleton) + self.placeholders
    }

    pub fn paste_policy(&self) -> &dyn PastePolicy {
        self.paste.as_ref()
    }

    /// Returns true if `c` appears literally in the template.
    pub fn contains_literal(&self, c: char) -> bool {
        c != PLACEHOLDER && self.template.contains(c)
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mask")
            .field("template", &self.template)
            .field("paste", &self.paste.name())
            .finish()
    }
}

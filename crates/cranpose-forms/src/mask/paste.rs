//! Paste detection and per-mask paste normalization.

use super::{extract_digits, Mask};
use crate::text::{char_len, take_chars};

/// Country code digit of Russian phone numbers.
const RU_COUNTRY_DIGIT: char = '7';
/// Domestic trunk prefix that replaces the country code in local notation.
const RU_TRUNK_DIGIT: char = '8';
/// Subscriber number length without country code.
const RU_NATIONAL_DIGITS: usize = 10;

/// Returns true when the edit grew the text by more than one char.
///
/// One-char growth is typing; anything larger came from a paste (or an
/// autofill, which is handled the same way).
pub fn is_paste(prior: &str, edited: &str) -> bool {
    char_len(edited) > char_len(prior) + 1
}

/// Strategy that turns a pasted payload into the candidate value the mask
/// engine renders.
///
/// Policies are attached to a [`Mask`] with [`Mask::with_paste_policy`] so
/// locale-specific rules stay out of the engine.
pub trait PastePolicy: Send + Sync + 'static {
    /// Short identifier for logs and `Debug` output.
    fn name(&self) -> &'static str;

    /// Normalizes the full edited text of a paste.
    fn normalize(&self, mask: &Mask, pasted: &str) -> String;
}

/// Keeps the pasted text as typed, cut to the mask length.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimPaste;

impl PastePolicy for VerbatimPaste {
    fn name(&self) -> &'static str {
        "verbatim"
    }

    fn normalize(&self, mask: &Mask, pasted: &str) -> String {
        take_chars(pasted, mask.length()).to_owned()
    }
}

/// Canonicalizes Russian mobile numbers pasted with or without the `+7`
/// country code or the domestic `8` prefix.
///
/// Returns a digit string starting with `7`, ready for rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuPhonePaste;

impl PastePolicy for RuPhonePaste {
    fn name(&self) -> &'static str {
        "ru-phone"
    }

    fn normalize(&self, mask: &Mask, pasted: &str) -> String {
        let payload = pasted
            .strip_prefix(mask.prefix_literal())
            .unwrap_or(pasted);
        let mut digits = extract_digits(payload);
        match digits.chars().next() {
            Some(RU_TRUNK_DIGIT) if digits.len() > RU_NATIONAL_DIGITS => {
                digits.remove(0);
                digits.insert(0, RU_COUNTRY_DIGIT);
            }
            Some(RU_COUNTRY_DIGIT) => digits.truncate(mask.digit_capacity()),
            _ => digits.insert(0, RU_COUNTRY_DIGIT),
        }
        log::trace!("ru-phone paste {pasted:?} normalized to {digits:?}");
        digits
    }
}

//! Text value types shared by form fields and the mask engine.
//!
//! Mirrors the shape of Jetpack Compose's `TextFieldValue` / `TextRange` pair,
//! reduced to what a form field needs: the text and its selection.
//!
//! # Offsets
//!
//! Unlike the editor-facing text state, every offset and length here counts
//! `char`s, not UTF-8 bytes. Mask templates are positional, so a literal such
//! as `№` must occupy exactly one slot just like `(` does.

mod range;
mod value;

pub use range::TextRange;
pub use value::TextFieldValue;

/// Number of `char`s in `text`.
#[inline]
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Returns the first `count` chars of `text` (or all of it).
pub(crate) fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// Returns `text` without its first `count` chars.
pub(crate) fn drop_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[index..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_and_drop_split_on_chars() {
        let text = "№ 12";
        assert_eq!(take_chars(text, 1), "№");
        assert_eq!(drop_chars(text, 1), " 12");
        assert_eq!(take_chars(text, 10), text);
        assert_eq!(drop_chars(text, 10), "");
        assert_eq!(char_len(text), 4);
    }
}

//! Filling a template with digits.

use super::{Mask, PLACEHOLDER};
use crate::text::{char_len, drop_chars};

/// Fills the placeholders of `template` with `remaining`, left to right.
///
/// `digits` is the full digit string the caller extracted from the value.
/// When it is exactly the template's leading digit literal, nothing is
/// filled: that digit is already shown by the template. Digits left over once
/// the placeholders run out are dropped; unfilled placeholders stay `#`.
pub fn render(
    digits: &str,
    leading_digit: Option<char>,
    remaining: &str,
    template: &str,
) -> String {
    if is_only_leading_digit(digits, leading_digit) {
        return template.to_owned();
    }
    let mut remaining = remaining.chars();
    template
        .chars()
        .map(|c| match c {
            PLACEHOLDER => remaining.next().unwrap_or(PLACEHOLDER),
            literal => literal,
        })
        .collect()
}

fn is_only_leading_digit(digits: &str, leading_digit: Option<char>) -> bool {
    let mut chars = digits.chars();
    leading_digit.is_some() && chars.next() == leading_digit && chars.next().is_none()
}

/// Drops the mask's digit skeleton from the front of `value`.
///
/// `value` is returned unchanged when it is no longer than the skeleton or
/// does not start with it.
pub fn clear_mask_prefix<'a>(value: &'a str, mask: &Mask) -> &'a str {
    let skeleton = mask.digit_skeleton();
    let skeleton_len = char_len(skeleton);
    if char_len(value) <= skeleton_len || !value.starts_with(skeleton) {
        value
    } else {
        drop_chars(value, skeleton_len)
    }
}

/// Cuts a rendering at its first unfilled placeholder and trims trailing
/// literals, keeping an opening `(`.
pub fn trim_rendered(rendered: &str) -> &str {
    let filled = rendered
        .split_once(PLACEHOLDER)
        .map_or(rendered, |(filled, _)| filled);
    filled.trim_end_matches(|c: char| !c.is_ascii_digit() && c != '(')
}

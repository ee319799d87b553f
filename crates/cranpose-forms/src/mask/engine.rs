//! The mask engine: one pure function per edit.

use super::{
    classify, clear_mask_prefix, extract_digits, is_overwrite, is_paste, render, trim_rendered,
    EditClass, Mask,
};
use crate::text::{char_len, take_chars, TextFieldValue, TextRange};

/// Reconciles an edit from the input surface with `mask`.
///
/// * `state` - the value the field rendered before the edit.
/// * `edited` - the raw text and selection the input surface produced.
/// * `is_focused` - whether the field currently has focus.
/// * `clear_on_unfocused_at_placeholder` - blank out a field that holds only
///   the mask prefix once it loses focus, and snap the cursor past the prefix
///   even for range selections.
///
/// The result is always a prefix of a full rendering of `mask` and is never
/// longer than the mask. Selection offsets of `edited` are clamped to its
/// text first. The function has no side effects and never fails.
pub fn apply_mask(
    mask: &Mask,
    state: &TextFieldValue,
    edited: &TextFieldValue,
    is_focused: bool,
    clear_on_unfocused_at_placeholder: bool,
) -> TextFieldValue {
    let edited = edited.clamped();
    let prior = state.text.as_str();
    let start_mask = mask.prefix_literal();
    let start_len = char_len(start_mask);

    let pasted = is_paste(prior, &edited.text);
    let value = if pasted {
        mask.paste_policy().normalize(mask, &edited.text)
    } else {
        take_chars(&edited.text, mask.length()).to_owned()
    };
    let class = classify(mask, prior, &edited);
    let cursor = edited.selection.start;
    log::trace!(
        "mask {:?}: {:?} -> {:?} classified {class:?}, pasted={pasted}",
        mask.template(),
        prior,
        edited.text,
    );

    if class == EditClass::Moved && cursor <= start_len {
        let selected = edited.selection.end > edited.selection.start + 1;
        if !clear_on_unfocused_at_placeholder && selected {
            return edited;
        }
        let text = if !is_focused && clear_on_unfocused_at_placeholder && value == start_mask {
            String::new()
        } else {
            value
        };
        return TextFieldValue {
            text,
            selection: TextRange::cursor(start_len),
        };
    }

    let digits = extract_digits(&value);
    // Backspacing stops at the bare prefix; only the next removal clears it.
    if class == EditClass::Removed
        && (digits == mask.digit_skeleton() || digits.is_empty())
        && value != start_mask
    {
        log::debug!("mask {:?}: removal cleared the field", mask.template());
        return TextFieldValue::default();
    }

    match class {
        EditClass::Removed | EditClass::Added | EditClass::Moved => {
            let rendered = render(
                &digits,
                mask.leading_digit_literal(),
                clear_mask_prefix(&digits, mask),
                mask.template(),
            );
            let text = take_chars(trim_rendered(&rendered), mask.length()).to_owned();
            let selection = match class {
                EditClass::Added | EditClass::Removed => {
                    if pasted || cursor >= char_len(&value) {
                        TextRange::cursor(char_len(&text))
                    } else {
                        let plus = usize::from(cursor < start_len + 1);
                        if class == EditClass::Added {
                            TextRange::cursor(cursor + plus)
                        } else {
                            TextRange::cursor_back(cursor, plus)
                        }
                    }
                }
                _ => edited.selection,
            };
            TextFieldValue { text, selection }
        }
        EditClass::Completed => {
            if is_overwrite(mask, prior, &edited.text) {
                let diff = char_len(&edited.text) - mask.length();
                log::debug!(
                    "mask {:?}: rejected overwrite of a complete value",
                    mask.template()
                );
                TextFieldValue {
                    text: prior.to_owned(),
                    selection: TextRange::cursor_back(cursor, diff),
                }
            } else {
                TextFieldValue {
                    text: take_chars(&value, mask.length()).to_owned(),
                    selection: edited.selection,
                }
            }
        }
    }
}

//! Edit classification.

use super::Mask;
use crate::text::{char_len, TextFieldValue};

/// What a single edit did to a masked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditClass {
    /// The visible text got shorter.
    Removed,
    /// The visible text got longer.
    Added,
    /// The field is full: either the cursor sits at the end of a complete
    /// value, or more text arrived while it was already full.
    Completed,
    /// Same length, e.g. arrow keys or a same-length replacement.
    Moved,
}

/// True when the field already holds a full value and the edit is longer
/// than the mask.
pub fn is_overwrite(mask: &Mask, prior: &str, edited: &str) -> bool {
    char_len(prior) == mask.length() && char_len(edited) > mask.length()
}

/// Classifies `edited` against the previously rendered `prior` text.
///
/// The overwrite check runs first; by length alone a full field receiving
/// more text would look like [`EditClass::Added`].
pub fn classify(mask: &Mask, prior: &str, edited: &TextFieldValue) -> EditClass {
    let edited_len = char_len(&edited.text);
    let visible_len = edited_len.min(mask.length());
    let prior_len = char_len(prior);

    if is_overwrite(mask, prior, &edited.text) {
        EditClass::Completed
    } else if prior_len > visible_len {
        EditClass::Removed
    } else if prior_len < visible_len {
        EditClass::Added
    } else if visible_len == mask.length() && edited.selection.start == edited_len {
        EditClass::Completed
    } else {
        EditClass::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextRange;

    const FULL: &str = "+7 (950) 123 45 68";

    fn mask() -> Mask {
        Mask::ru_phone()
    }

    #[test]
    fn overwrite_of_full_value_is_completed() {
        let edited = TextFieldValue::with_selection("+7 (9150) 123 45 68", TextRange::cursor(6));
        assert!(is_overwrite(&mask(), FULL, &edited.text));
        assert_eq!(classify(&mask(), FULL, &edited), EditClass::Completed);
    }

    #[test]
    fn shorter_is_removed() {
        let edited = TextFieldValue::new("+7 (950) 123 45 6");
        assert_eq!(classify(&mask(), FULL, &edited), EditClass::Removed);
    }

    #[test]
    fn longer_is_added() {
        let edited = TextFieldValue::new("+7 (95");
        assert_eq!(classify(&mask(), "+7 (9", &edited), EditClass::Added);
    }

    #[test]
    fn long_edit_on_partial_value_is_added() {
        let edited = TextFieldValue::new("+7 (950) 123 45 689");
        assert_eq!(
            classify(&mask(), "+7 (950) 123 45 6", &edited),
            EditClass::Added
        );
    }

    #[test]
    fn full_value_with_cursor_at_end_is_completed() {
        let edited = TextFieldValue::new(FULL);
        assert_eq!(classify(&mask(), FULL, &edited), EditClass::Completed);
    }

    #[test]
    fn same_length_elsewhere_is_moved() {
        let edited = TextFieldValue::with_selection(FULL, TextRange::cursor(3));
        assert_eq!(classify(&mask(), FULL, &edited), EditClass::Moved);

        let partial = TextFieldValue::with_selection("+7 (95", TextRange::cursor(6));
        assert_eq!(classify(&mask(), "+7 (95", &partial), EditClass::Moved);
    }
}

//! Keystroke-by-keystroke typing through a [`FormField`].

use crate::field::{FieldFilters, FormField};
use crate::mask::Mask;
use crate::text::{TextFieldValue, TextRange};
use crate::FormFieldState;

const DASHED_PHONE: &str = "+7 (###) ###-##-##";

fn type_digits(field: &mut FormField, digits: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for digit in digits.chars() {
        let mut text = field.state().value();
        text.push(digit);
        field.on_value_change(TextFieldValue::new(text));
        seen.push(field.state().value());
    }
    seen
}

#[test]
fn typing_grows_to_full_number() {
    let filters = FieldFilters::default().with_mask(Mask::new(DASHED_PHONE).unwrap());
    let mut field = FormField::new(FormFieldState::new(), filters);
    field.on_focus_changed(true);

    let seen = type_digits(&mut field, "9501234568");

    assert_eq!(
        seen,
        [
            "+7 (9",
            "+7 (95",
            "+7 (950",
            "+7 (950) 1",
            "+7 (950) 12",
            "+7 (950) 123",
            "+7 (950) 123-4",
            "+7 (950) 123-45",
            "+7 (950) 123-45-6",
            "+7 (950) 123-45-68",
        ]
    );
    for pair in seen.windows(2) {
        assert!(pair[0].len() < pair[1].len());
    }
    assert_eq!(field.state().text().selection, TextRange::cursor(18));
}

#[test]
fn typing_past_a_full_number_is_ignored() {
    let mut field = FormField::new(FormFieldState::new(), FieldFilters::ru_phone());
    field.on_focus_changed(true);
    type_digits(&mut field, "9501234568");
    assert_eq!(field.state().value(), "+7 (950) 123 45 68");

    field.on_value_change(TextFieldValue::new("+7 (950) 123 45 689"));
    assert_eq!(field.state().value(), "+7 (950) 123 45 68");
    assert_eq!(field.state().text().selection, TextRange::cursor(18));
}

#[test]
fn typing_into_a_seeded_placeholder() {
    let mut field = FormField::new(FormFieldState::with_value("+7 "), FieldFilters::ru_phone());
    field.on_focus_changed(true);
    assert_eq!(field.state().value(), "+7 ");

    field.on_value_change(TextFieldValue::new("+7 9"));
    assert_eq!(field.state().value(), "+7 (9");
}

#[test]
fn unfocused_edit_to_prefix_clears_field() {
    let mut field = FormField::new(FormFieldState::with_value("+7 (9"), FieldFilters::ru_phone());
    field.on_value_change(TextFieldValue::with_selection("+7 (", TextRange::cursor(4)));
    assert_eq!(field.state().value(), "+7 (");

    field.on_value_change(TextFieldValue::with_selection("+7 (", TextRange::cursor(4)));
    assert_eq!(field.state().value(), "");
}

#[test]
fn blur_clears_a_field_left_at_the_prefix() {
    let mut field = FormField::new(FormFieldState::new(), FieldFilters::ru_phone());
    field.on_focus_changed(true);
    type_digits(&mut field, "9");
    field.on_value_change(TextFieldValue::new("+7 ("));
    assert_eq!(field.state().value(), "+7 (");

    field.on_focus_changed(false);
    assert_eq!(field.state().value(), "");
}

#[test]
fn blur_keeps_a_partial_number() {
    let mut field = FormField::new(FormFieldState::new(), FieldFilters::ru_phone());
    field.on_focus_changed(true);
    type_digits(&mut field, "950");

    field.on_focus_changed(false);
    assert_eq!(field.state().value(), "+7 (950");
    assert_eq!(field.state().text().selection, TextRange::cursor(7));
}

#[test]
fn blur_without_prefix_clearing_keeps_the_prefix() {
    let filters = FieldFilters::default().with_mask(Mask::ru_phone());
    let mut field = FormField::new(FormFieldState::with_value("+7 ("), filters);
    field.on_focus_changed(true);
    field.on_focus_changed(false);
    assert_eq!(field.state().value(), "+7 (");
}

//! Scripted walkthrough of masked form fields.
//!
//! Drives a phone field and a code entry the way an input surface would and
//! prints what the field shows after every event.
//!
//! Run with:
//! ```bash
//! RUST_LOG=cranpose_forms=trace cargo run --package forms-demo
//! ```

use anyhow::{ensure, Result};
use cranpose_forms::{
    CodeEntry, FieldError, FieldErrors, FieldFilters, FormField, FormFieldState, Mask,
    TextFieldValue,
};

fn phone_errors(target: &str) -> FieldErrors {
    let digits = cranpose_forms::mask::extract_digits(target);
    let mut errors = FieldErrors::new();
    if digits.is_empty() {
        errors.push(FieldError::new("Phone number is required"));
    } else if digits.len() != 11 {
        errors.push(FieldError::new("Phone number is incomplete"));
    }
    errors
}

fn show(step: &str, field: &FormField) {
    let value = field.state().text();
    println!(
        "  {step:<28} {:<20} cursor={:<3} error={}",
        format!("{:?}", value.text),
        value.selection.start,
        field.is_error()
    );
}

fn typing(mask: &Mask) -> Result<()> {
    println!("--- Typing into {:?} ---", mask.template());
    let state = FormFieldState::new().with_validator(phone_errors);
    let mut field = FormField::new(state, FieldFilters::ru_phone());
    field.on_focus_changed(true);

    for digit in "9501234568".chars() {
        let mut text = field.state().value();
        text.push(digit);
        field.on_value_change(TextFieldValue::new(text));
        show(&format!("typed {digit}"), &field);
    }
    ensure!(
        field.state().value() == "+7 (950) 123 45 68",
        "typing produced {:?}",
        field.state().value()
    );

    while !field.state().value().is_empty() {
        let mut text = field.state().value();
        text.pop();
        field.on_value_change(TextFieldValue::new(text));
        show("backspace", &field);
    }
    field.on_focus_changed(false);
    show("focus lost", &field);
    println!("✓ typing and clearing\n");
    Ok(())
}

fn pasting(mask: &Mask) -> Result<()> {
    println!("--- Pasting into {:?} ---", mask.template());
    for pasted in ["+79501234568", "89501234568", "9501234568", "8 (950) 123-45-68"] {
        let mut field = FormField::new(FormFieldState::with_value("+7 "), FieldFilters::ru_phone());
        field.on_focus_changed(true);
        field.on_value_change(TextFieldValue::new(pasted));
        show(&format!("pasted {pasted:?}"), &field);
        ensure!(
            field.state().value() == "+7 (950) 123 45 68",
            "paste of {pasted:?} produced {:?}",
            field.state().value()
        );
    }
    println!("✓ paste normalization\n");
    Ok(())
}

fn code_entry() -> Result<()> {
    println!("--- Code entry ---");
    let state = FormFieldState::new();
    let entry = CodeEntry::new(4);
    entry.attach(&state);
    entry.on_focus_changed(&state, true);
    for text in ["1", "12", "12a", "123", "1234", "12345"] {
        let accepted = entry.on_value_change(&state, TextFieldValue::new(text));
        println!(
            "  input {text:<8} accepted={accepted:<5} filled={}/{}",
            entry.filled(&state),
            entry.count()
        );
    }
    ensure!(entry.is_complete(&state), "code entry is not complete");
    println!("✓ code entry\n");
    Ok(())
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Cranpose Forms Demo ===\n");
    let mask = Mask::ru_phone();
    log::info!("using mask {mask:?}");

    typing(&mask)?;
    pasting(&mask)?;
    code_entry()?;

    println!("All scenarios passed");
    Ok(())
}

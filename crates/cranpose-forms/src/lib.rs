//! Form fields for Cranpose: masked text input, field state and validation
//! plumbing.
//!
//! The centerpiece is [`apply_mask`], a pure function that takes the value a
//! field showed, the raw edit the input surface produced and returns the
//! corrected value and selection for a positional mask such as
//! `+7 (###) ### ## ##`. Everything else is thin glue around it:
//!
//! - [`FormFieldState`] - shared value/selection holder with validation state
//! - [`FieldFilters`] / [`FormField`] - the per-edit pipeline and focus handling
//! - [`CodeEntry`] - digit-only fixed-length code input

pub mod code_entry;
pub mod field;
pub mod mask;
pub mod state;
pub mod text;

pub use code_entry::CodeEntry;
pub use field::{FieldFilters, FormField};
pub use mask::{apply_mask, EditClass, Mask, MaskError, PastePolicy, RU_PHONE_MASK};
pub use state::{FieldError, FieldErrors, FormFieldState};
pub use text::{TextFieldValue, TextRange};

#[cfg(test)]
#[path = "tests/ru_phone_mask_tests.rs"]
mod ru_phone_mask_tests;

#[cfg(test)]
#[path = "tests/typing_tests.rs"]
mod typing_tests;

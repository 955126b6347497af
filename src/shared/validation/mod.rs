pub mod string_length;

pub use string_length::{validate_required, validate_string_length, validate_string_value};

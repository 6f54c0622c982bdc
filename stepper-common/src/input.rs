//! Validation of free-text stepper input

use std::sync::LazyLock;

use regex::Regex;

/// Anything a user can reach while typing a decimal number:
/// optional minus, digits, at most one point, digits.
static PARTIAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("partial number pattern"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("input {0:?} is not a partial number")]
    Rejected(String),
    #[error("input {0:?} does not parse as a number yet")]
    Incomplete(String),
}

/// Classification of accepted field text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartialInput {
    /// Field cleared
    Empty,
    /// Parses as a number (`"5"`, `"-5."`, `".5"`)
    Number(f64),
    /// Accepted but not a number yet (`"-"`, `"."`, `"-."`)
    Incomplete,
}

/// Check keystroke text against the partial-number pattern.
pub fn classify(text: &str) -> Result<PartialInput, InputError> {
    if text.is_empty() {
        return Ok(PartialInput::Empty);
    }
    if !PARTIAL_NUMBER.is_match(text) {
        return Err(InputError::Rejected(text.to_string()));
    }
    match parse_number(text) {
        Ok(value) => Ok(PartialInput::Number(value)),
        Err(_) => Ok(PartialInput::Incomplete),
    }
}

/// Parse accepted field text into a number.
pub fn parse_number(text: &str) -> Result<f64, InputError> {
    if !PARTIAL_NUMBER.is_match(text) {
        return Err(InputError::Rejected(text.to_string()));
    }
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(InputError::Incomplete(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| InputError::Incomplete(text.to_string()))
}

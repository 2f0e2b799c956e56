//! Field validation rules.
//!
//! Each rule is a pure function from the trimmed value to a [`ValidationResult`]. Lengths
//! are counted in UTF-16 code units, so an emoji counts twice, as it does in a browser.

use crate::model::Field;
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const NAME_ERROR: &str = "Name must be at least 3 characters";
pub const EMAIL_ERROR: &str = "Enter a valid email";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

/// Outcome of validating one field. `message` is empty when `valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// A rule applied to an already trimmed value.
pub type Validator = fn(&str) -> ValidationResult;

/// The rule table, one entry per field.
pub fn validator_for(field: Field) -> Validator {
    match field {
        Field::Name => validate_name,
        Field::Email => validate_email,
        Field::Message => validate_message,
    }
}

/// Trims `raw` and applies the rule for `field`.
pub fn validate(field: Field, raw: &str) -> ValidationResult {
    validator_for(field)(trim(raw))
}

/// Browser-style trim: Unicode whitespace and U+FEFF, but not U+0085.
pub fn trim(raw: &str) -> &str {
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Length as a browser reports it, in UTF-16 code units.
fn length(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_name(value: &str) -> ValidationResult {
    if length(value) < NAME_MIN_CHARS {
        ValidationResult::fail(NAME_ERROR)
    } else {
        ValidationResult::pass()
    }
}

/// Local part and domain without spaces, then a dot and a 2 or 3 letter lowercase
/// ASCII suffix. Uppercase suffixes and longer TLDs are rejected.
pub fn validate_email(value: &str) -> ValidationResult {
    if email_pattern().is_match(value) {
        ValidationResult::pass()
    } else {
        ValidationResult::fail(EMAIL_ERROR)
    }
}

pub fn validate_message(value: &str) -> ValidationResult {
    if length(value) < MESSAGE_MIN_CHARS {
        ValidationResult::fail(MESSAGE_ERROR)
    } else {
        ValidationResult::pass()
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^ ]+@[^ ]+\.[a-z]{2,3}$").expect("valid email regex"))
}

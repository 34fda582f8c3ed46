//! Validation rules for credential form fields
//!
//! Every rule is three-valued: empty input is [`Validity::Unevaluated`], which is
//! deliberately distinct from [`Validity::Invalid`] so an untouched field never
//! shows a warning.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// Minimum number of character classes (letters, digits, marks) a password must mix
pub const MIN_PASSWORD_CLASSES: usize = 2;

/// Marks accepted in passwords
pub const PASSWORD_MARKS: &str = "$@!%*#?&";

/// Names must be longer than this many characters
pub const MIN_NAME_LENGTH: usize = 2;

/// Local part of word characters/hyphens in dot-separated groups, `@`, a domain of
/// word/hyphen labels, and a 2-6 letter top-level label optionally followed by a
/// second 2-letter label.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)@((?:[A-Za-z0-9_-]+\.)*[A-Za-z0-9_][A-Za-z0-9_-]{0,66})\.([A-Za-z]{2,6}(?:\.[A-Za-z]{2})?)$",
    )
    .expect("email pattern is a valid regex")
});

/// Result of validating one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Not evaluated yet: the form is untouched or the field is empty
    #[default]
    Unevaluated,
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }

    pub fn is_invalid(self) -> bool {
        self == Validity::Invalid
    }

    /// Runs `check` on non-empty input; empty input stays unevaluated
    fn of(input: &str, check: impl FnOnce(&str) -> bool) -> Self {
        if input.is_empty() {
            Validity::Unevaluated
        } else {
            Validity::from(check(input))
        }
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// Validates an email address against the restricted grammar
pub fn validate_email(input: &str) -> Validity {
    Validity::of(input, |email| EMAIL_PATTERN.is_match(email))
}

/// Validates a password: at least 10 allowed characters mixing 2 of {letters, digits, marks}
pub fn validate_password(input: &str) -> Validity {
    Validity::of(input, |password| {
        let allowed = password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_MARKS.contains(c));
        if !allowed || password.chars().count() < MIN_PASSWORD_LENGTH {
            return false;
        }

        let classes = [
            password.chars().any(|c| c.is_ascii_alphabetic()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| PASSWORD_MARKS.contains(c)),
        ];
        classes.into_iter().filter(|present| *present).count() >= MIN_PASSWORD_CLASSES
    })
}

/// Validates a display name: more than one character
pub fn validate_name(input: &str) -> Validity {
    Validity::of(input, |name| name.chars().count() >= MIN_NAME_LENGTH)
}

//! Signup form validation rules.
//!
//! Every rule is evaluated on every call; an empty [`FieldErrors`] means the
//! form may be submitted.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::form::{FieldErrors, FieldName, FormFields};

pub const MIN_PASSWORD_LEN: usize = 6;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const TERMS_REQUIRED: &str = "You must agree to the terms and conditions";

// Browser whitespace: Unicode White_Space without NEL, plus the BOM.
const NON_SPACE: &str = r"[^\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// Unanchored: "x a@b.c y" passes, same as a plain substring test.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{NON_SPACE}+@{NON_SPACE}+\.{NON_SPACE}+"))
        .unwrap_or_else(|e| unreachable!("email pattern: {e}"))
});

/// Whitespace as the browser's `String.prototype.trim` sees it.
#[must_use]
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strip leading and trailing [`is_form_whitespace`] characters.
#[must_use]
pub fn trim_form_text(text: &str) -> &str {
    text.trim_matches(is_form_whitespace)
}

/// Loose shape check: something, `@`, something, `.`, something.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate every field and collect the failures.
#[must_use]
pub fn validate_form(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if trim_form_text(&fields.first_name).is_empty() {
        errors.insert(FieldName::FirstName, FIRST_NAME_REQUIRED);
    }

    if trim_form_text(&fields.last_name).is_empty() {
        errors.insert(FieldName::LastName, LAST_NAME_REQUIRED);
    }

    if fields.email.is_empty() {
        errors.insert(FieldName::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&fields.email) {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }

    if fields.password.is_empty() {
        errors.insert(FieldName::Password, PASSWORD_REQUIRED);
    } else if fields.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        // UTF-16 code units, so one emoji counts as two.
        errors.insert(FieldName::Password, PASSWORD_TOO_SHORT);
    }

    if fields.confirm_password.is_empty() {
        errors.insert(FieldName::ConfirmPassword, CONFIRM_REQUIRED);
    } else if fields.password != fields.confirm_password {
        errors.insert(FieldName::ConfirmPassword, PASSWORDS_DIFFER);
    }

    if !fields.agree_to_terms {
        errors.insert(FieldName::AgreeToTerms, TERMS_REQUIRED);
    }

    errors
}

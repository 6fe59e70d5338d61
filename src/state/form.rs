//! Signup form state: field values, inline errors, and the submitting flag.
//!
//! DESIGN
//! ======
//! Errors are cleared optimistically when their field changes; validation
//! itself only runs at submit time (see `services::submission`).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from wiring DOM input events into form state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("value kind does not match field {field}")]
    KindMismatch { field: FieldName },
}

/// The six fields of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AgreeToTerms,
}

impl FieldName {
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::AgreeToTerms,
    ];

    /// The DOM `name` attribute for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::AgreeToTerms => "agreeToTerms",
        }
    }

    #[must_use]
    pub fn is_checkbox(self) -> bool {
        matches!(self, Self::AgreeToTerms)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_owned()))
    }
}

/// Values entered into the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl FormFields {
    /// Text value of a field, or `None` for the checkbox.
    #[must_use]
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FirstName => Some(&self.first_name),
            FieldName::LastName => Some(&self.last_name),
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
            FieldName::ConfirmPassword => Some(&self.confirm_password),
            FieldName::AgreeToTerms => None,
        }
    }

    /// Write one field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::KindMismatch`] when a text value targets the
    /// checkbox or a checkbox value targets a text field.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        let slot = match (field, value) {
            (FieldName::AgreeToTerms, FieldValue::Checked(checked)) => {
                self.agree_to_terms = checked;
                return Ok(());
            }
            (FieldName::FirstName, FieldValue::Text(text)) => (&mut self.first_name, text),
            (FieldName::LastName, FieldValue::Text(text)) => (&mut self.last_name, text),
            (FieldName::Email, FieldValue::Text(text)) => (&mut self.email, text),
            (FieldName::Password, FieldValue::Text(text)) => (&mut self.password, text),
            (FieldName::ConfirmPassword, FieldValue::Text(text)) => (&mut self.confirm_password, text),
            (field, _) => return Err(FormError::KindMismatch { field }),
        };
        *slot.0 = slot.1;
        Ok(())
    }

    /// Copy safe to log: the password fields are masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            password: mask(&self.password),
            confirm_password: mask(&self.confirm_password),
            ..self.clone()
        }
    }
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

/// New value carried by a field change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// A single input event from the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub field: FieldName,
    pub value: FieldValue,
}

impl FieldChange {
    #[must_use]
    pub fn text(field: FieldName, value: impl Into<String>) -> Self {
        Self { field, value: FieldValue::Text(value.into()) }
    }

    #[must_use]
    pub fn checked(field: FieldName, checked: bool) -> Self {
        Self { field, value: FieldValue::Checked(checked) }
    }

    /// Build a change from raw DOM input attributes.
    ///
    /// `input_type == "checkbox"` takes the `checked` flag; anything else
    /// takes `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a form field.
    pub fn from_input(name: &str, input_type: &str, value: String, checked: bool) -> Result<Self, FormError> {
        let field = name.parse::<FieldName>()?;
        let value = if input_type == "checkbox" { FieldValue::Checked(checked) } else { FieldValue::Text(value) };
        Ok(Self { field, value })
    }
}

/// Per-field validation messages. Only failing fields are present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Full state of the signup form.
///
/// Provided to components as `RwSignal<FormState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl FormState {
    /// Apply an input event and drop that field's stale error.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::KindMismatch`] without touching state if the value
    /// kind does not fit the field.
    pub fn apply_change(&mut self, change: FieldChange) -> Result<(), FormError> {
        let field = change.field;
        self.fields.set(field, change.value)?;
        self.errors.remove(field);
        Ok(())
    }

    /// Enter the submitting state. Returns `false` if a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn reset_fields(&mut self) {
        self.fields = FormFields::default();
    }
}

//! Labelled form inputs bound to `RwSignal<FormState>`.
//!
//! Inputs write through [`apply_input`], which clears the field's inline error
//! without re-validating.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

use crate::state::form::{FieldChange, FieldName, FormState};
use crate::state::store::StateHandle;

/// Apply a raw DOM input event to the form.
pub(crate) fn apply_input<H>(form: &H, name: &str, input_type: &str, value: String, checked: bool)
where
    H: StateHandle<FormState>,
{
    let change = match FieldChange::from_input(name, input_type, value, checked) {
        Ok(change) => change,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring input event");
            return;
        }
    };
    if let Some(Err(e)) = form.apply(|state| state.apply_change(change)) {
        tracing::warn!(error = %e, "ignoring input event");
    }
}

/// CSS class for an input, flagged when its field has an error.
pub(crate) fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input error" } else { "form-input" }
}

/// Text-like input (`text`, `email`, `password`) with label and inline error.
#[component]
pub fn TextField(
    field: FieldName,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let error = move || form.with(|state| state.errors.get(field).map(str::to_owned));
    let value = move || form.with(|state| state.fields.text(field).unwrap_or_default().to_owned());

    view! {
        <div class="form-group">
            <label for=field.as_str()>{label}</label>
            <input
                type=input_type
                id=field.as_str()
                name=field.as_str()
                class=move || input_class(error().is_some())
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| apply_input(&form, field.as_str(), input_type, event_target_value(&ev), false)
            />
            {move || error().map(|msg| view! { <span class="error-message">{msg}</span> })}
        </div>
    }
}

/// Terms-and-conditions checkbox with its static links.
#[component]
pub fn TermsCheckbox() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let field = FieldName::AgreeToTerms;
    let error = move || form.with(|state| state.errors.get(field).map(str::to_owned));

    view! {
        <div class="form-group checkbox-group">
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    name=field.as_str()
                    prop:checked=move || form.with(|state| state.fields.agree_to_terms)
                    on:change=move |ev| {
                        apply_input(&form, field.as_str(), "checkbox", String::new(), event_target_checked(&ev));
                    }
                />
                <span class="checkmark"></span>
                "I agree to the "
                <a href="/terms">"Terms and Conditions"</a>
                " and "
                <a href="/privacy">"Privacy Policy"</a>
            </label>
            {move || error().map(|msg| view! { <span class="error-message">{msg}</span> })}
        </div>
    }
}

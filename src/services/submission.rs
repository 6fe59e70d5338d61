//! Signup submission controller.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Idle`. The submitting flag is set before validation
//! runs and is cleared by a drop guard, so every exit path (invalid form,
//! failed account call, or the future being dropped mid-flight) returns the
//! form to idle.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures become inline [`FieldErrors`]. Account failures are
//! reported through the notifier and leave the entered values in place.
//! Completions that land after the page is gone are no-ops.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use tracing::{debug, info, warn};

use crate::net::account::{AccountApi, SubmissionError};
use crate::net::notify::{ACCOUNT_CREATED, ACCOUNT_FAILED, Notification, Notifier};
use crate::state::form::{FieldErrors, FormState};
use crate::state::store::StateHandle;
use crate::util::validation::validate_form;

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The account was created and the form reset.
    Created,
    /// Validation failed; the errors were published to the form.
    Invalid(FieldErrors),
    /// The account call failed; the form keeps its values.
    Failed(SubmissionError),
    /// A submission was already in flight.
    Busy,
    /// The form was torn down before the attempt could finish.
    Detached,
}

/// Clears the submitting flag when the attempt ends, however it ends.
struct SubmittingGuard<'a, H: StateHandle<FormState>> {
    form: &'a H,
}

impl<H: StateHandle<FormState>> Drop for SubmittingGuard<'_, H> {
    fn drop(&mut self) {
        let _ = self.form.apply(FormState::finish_submit);
    }
}

/// Validate the form and, if it passes, create the account.
pub async fn submit_form<H, A, N>(form: &H, api: &A, notifier: &N) -> SubmitOutcome
where
    H: StateHandle<FormState>,
    A: AccountApi + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(started) = form.apply(FormState::begin_submit) else {
        debug!("submit ignored: form detached");
        return SubmitOutcome::Detached;
    };
    if !started {
        debug!("submit ignored: already submitting");
        return SubmitOutcome::Busy;
    }
    let _guard = SubmittingGuard { form };

    let Some(fields) = form.snapshot().map(|state| state.fields) else {
        return SubmitOutcome::Detached;
    };

    let errors = validate_form(&fields);
    let published = errors.clone();
    if form.apply(move |state| state.errors = published).is_none() {
        return SubmitOutcome::Detached;
    }
    if !errors.is_empty() {
        info!(failing = errors.len(), "signup form invalid");
        return SubmitOutcome::Invalid(errors);
    }

    let logged = serde_json::to_string(&fields.redacted()).unwrap_or_default();
    info!(form = %logged, "form submitted");

    let result = api.create_account(&fields).await;

    if form.snapshot().is_none() {
        debug!("account call finished after form was torn down");
        return SubmitOutcome::Detached;
    }

    match result {
        Ok(()) => {
            info!(email = %fields.email, "account created");
            notifier.notify(Notification::success(ACCOUNT_CREATED));
            let _ = form.apply(FormState::reset_fields);
            SubmitOutcome::Created
        }
        Err(e) => {
            warn!(error = %e, "account creation failed");
            notifier.notify(Notification::failure(ACCOUNT_FAILED));
            SubmitOutcome::Failed(e)
        }
    }
}

use super::*;
use crate::net::notify::NotificationKind;
use crate::state::form::{FieldChange, FieldName, FormFields};
use crate::state::store::LocalStore;
use std::cell::{Cell, RefCell};
use std::time::Duration;

// =========================================================================
// Mocks
// =========================================================================

/// Records calls and the submitting flag observed while the call is in flight.
struct MockAccountApi {
    form: LocalStore<FormState>,
    result: Result<(), SubmissionError>,
    calls: Cell<usize>,
    seen_submitting: Cell<Option<bool>>,
    dispose_during_call: bool,
}

impl MockAccountApi {
    fn new(form: &LocalStore<FormState>, result: Result<(), SubmissionError>) -> Self {
        Self {
            form: form.clone(),
            result,
            calls: Cell::new(0),
            seen_submitting: Cell::new(None),
            dispose_during_call: false,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AccountApi for MockAccountApi {
    async fn create_account(&self, _fields: &FormFields) -> Result<(), SubmissionError> {
        self.calls.set(self.calls.get() + 1);
        self.seen_submitting.set(self.form.with(|s| s.submitting));
        tokio::time::sleep(Duration::from_secs(2)).await;
        if self.dispose_during_call {
            self.form.dispose();
        }
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}

fn valid_fields() -> FormFields {
    FormFields {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        password: "engine42".into(),
        confirm_password: "engine42".into(),
        agree_to_terms: true,
    }
}

fn store_with(fields: FormFields) -> LocalStore<FormState> {
    LocalStore::new(FormState { fields, ..FormState::default() })
}

// =========================================================================
// Valid submission
// =========================================================================

#[tokio::test(start_paused = true)]
async fn valid_submit_creates_account_and_resets_fields() {
    let form = store_with(valid_fields());
    let api = MockAccountApi::new(&form, Ok(()));
    let notifier = RecordingNotifier::default();

    let outcome = submit_form(&form, &api, &notifier).await;

    assert_eq!(outcome, SubmitOutcome::Created);
    assert_eq!(api.calls.get(), 1);
    assert_eq!(api.seen_submitting.get(), Some(true));
    let state = form.snapshot().unwrap();
    assert!(!state.submitting);
    assert_eq!(state.fields, FormFields::default());
    assert!(state.errors.is_empty());
    assert_eq!(*notifier.seen.borrow(), vec![Notification::success("Account created successfully!")]);
}

#[tokio::test(start_paused = true)]
async fn valid_submit_replaces_stale_errors() {
    let form = store_with(valid_fields());
    form.apply(|s| s.errors.insert(FieldName::ConfirmPassword, "Passwords do not match"));
    let api = MockAccountApi::new(&form, Ok(()));

    let outcome = submit_form(&form, &api, &RecordingNotifier::default()).await;

    assert_eq!(outcome, SubmitOutcome::Created);
    assert!(form.snapshot().unwrap().errors.is_empty());
}

#[tokio::test(start_paused = true)]
async fn simulated_api_takes_its_latency() {
    let form = store_with(valid_fields());
    let api = crate::net::account::SimulatedAccountApi::new(Duration::from_secs(2));
    let start = tokio::time::Instant::now();

    let outcome = submit_form(&form, &api, &RecordingNotifier::default()).await;

    assert_eq!(outcome, SubmitOutcome::Created);
    assert!(start.elapsed() >= Duration::from_secs(2));
}

// =========================================================================
// Invalid submission
// =========================================================================

#[tokio::test(start_paused = true)]
async fn invalid_submit_publishes_errors_without_calling_api() {
    let fields = FormFields { email: "abc".into(), agree_to_terms: false, ..valid_fields() };
    let form = store_with(fields.clone());
    let api = MockAccountApi::new(&form, Ok(()));
    let notifier = RecordingNotifier::default();
    let before = form.revision();

    let outcome = submit_form(&form, &api, &notifier).await;

    let errors = match outcome {
        SubmitOutcome::Invalid(errors) => errors,
        other => panic!("expected Invalid, got {other:?}"),
    };
    assert_eq!(errors.get(FieldName::Email), Some("Email is invalid"));
    assert_eq!(errors.get(FieldName::AgreeToTerms), Some("You must agree to the terms and conditions"));
    assert_eq!(api.calls.get(), 0);
    assert!(notifier.seen.borrow().is_empty());

    let state = form.snapshot().unwrap();
    assert!(!state.submitting);
    assert_eq!(state.fields, fields);
    assert_eq!(state.errors, errors);
    // begin, publish errors, finish
    assert_eq!(form.revision() - before, 3);
}

#[tokio::test(start_paused = true)]
async fn errors_clear_per_field_after_invalid_submit() {
    let form = store_with(FormFields::default());
    let api = MockAccountApi::new(&form, Ok(()));
    let _ = submit_form(&form, &api, &RecordingNotifier::default()).await;

    form.apply(|s| s.apply_change(FieldChange::text(FieldName::LastName, "L"))).unwrap().unwrap();

    let errors = form.snapshot().unwrap().errors;
    assert!(!errors.contains(FieldName::LastName));
    assert_eq!(errors.len(), 5);
}

// =========================================================================
// Failed submission
// =========================================================================

#[tokio::test(start_paused = true)]
async fn failed_account_call_keeps_fields_and_clears_flag() {
    let form = store_with(valid_fields());
    let api = MockAccountApi::new(&form, Err(SubmissionError::Unavailable("down".into())));
    let notifier = RecordingNotifier::default();

    let outcome = submit_form(&form, &api, &notifier).await;

    assert_eq!(outcome, SubmitOutcome::Failed(SubmissionError::Unavailable("down".into())));
    let state = form.snapshot().unwrap();
    assert!(!state.submitting);
    assert_eq!(state.fields, valid_fields());
    let seen = notifier.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, NotificationKind::Failure);
    assert_eq!(seen[0].message, "Error creating account. Please try again.");
}

// =========================================================================
// Busy / detached / dropped
// =========================================================================

#[tokio::test(start_paused = true)]
async fn second_submit_while_in_flight_is_busy() {
    let form = store_with(valid_fields());
    form.apply(FormState::begin_submit);
    let api = MockAccountApi::new(&form, Ok(()));

    let outcome = submit_form(&form, &api, &RecordingNotifier::default()).await;

    assert_eq!(outcome, SubmitOutcome::Busy);
    assert_eq!(api.calls.get(), 0);
    assert!(form.snapshot().unwrap().submitting, "in-flight submission still owns the flag");
}

#[tokio::test(start_paused = true)]
async fn submit_on_disposed_form_is_detached() {
    let form = store_with(valid_fields());
    form.dispose();
    let api = MockAccountApi::new(&form, Ok(()));

    let outcome = submit_form(&form, &api, &RecordingNotifier::default()).await;

    assert_eq!(outcome, SubmitOutcome::Detached);
    assert_eq!(api.calls.get(), 0);
}

#[tokio::test(start_paused = true)]
async fn completion_after_teardown_is_a_noop() {
    let form = store_with(valid_fields());
    let mut api = MockAccountApi::new(&form, Ok(()));
    api.dispose_during_call = true;
    let notifier = RecordingNotifier::default();

    let outcome = submit_form(&form, &api, &notifier).await;

    assert_eq!(outcome, SubmitOutcome::Detached);
    assert_eq!(api.calls.get(), 1);
    assert!(notifier.seen.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_in_flight_submit_clears_flag() {
    let form = store_with(valid_fields());
    let api = MockAccountApi::new(&form, Ok(()));
    let notifier = RecordingNotifier::default();

    {
        let pending = submit_form(&form, &api, &notifier);
        let timed_out = tokio::time::timeout(Duration::from_millis(10), pending).await;
        assert!(timed_out.is_err());
    }

    let state = form.snapshot().unwrap();
    assert!(!state.submitting);
    assert_eq!(state.fields, valid_fields());
    assert!(notifier.seen.borrow().is_empty());
}

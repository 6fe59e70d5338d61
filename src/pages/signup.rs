//! Signup page: account form plus the floating support chat.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::form_field::{TermsCheckbox, TextField};
use crate::components::notification_modal::NotificationModal;
use crate::config::SignupConfig;
use crate::net::notify::Notification;
use crate::state::form::{FieldName, FormState};

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Creating Account..." } else { "Create Account" }
}

fn submit_class(submitting: bool) -> &'static str {
    if submitting { "submit-btn submitting" } else { "submit-btn" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let config = expect_context::<SignupConfig>();
    let notice = expect_context::<RwSignal<Option<Notification>>>();
    let submitting = move || form.with(|state| state.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::account::SimulatedAccountApi::from(&config);
            let outcome = crate::services::submission::submit_form(&form, &api, &notice).await;
            tracing::debug!(?outcome, "signup submit finished");
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, notice);
        }
    };

    view! {
        <div class="signup-container">
            <ChatWidget/>

            <div class="signup-form">
                <h2>"Create Your Account"</h2>
                <p class="subtitle">"Join our community today"</p>

                <form on:submit=on_submit novalidate=true>
                    <div class="form-row">
                        <TextField
                            field=FieldName::FirstName
                            label="First Name"
                            input_type="text"
                            placeholder="Enter your first name"
                        />
                        <TextField
                            field=FieldName::LastName
                            label="Last Name"
                            input_type="text"
                            placeholder="Enter your last name"
                        />
                    </div>
                    <TextField
                        field=FieldName::Email
                        label="Email Address"
                        input_type="email"
                        placeholder="Enter your email"
                    />
                    <TextField
                        field=FieldName::Password
                        label="Password"
                        input_type="password"
                        placeholder="Create a password"
                    />
                    <TextField
                        field=FieldName::ConfirmPassword
                        label="Confirm Password"
                        input_type="password"
                        placeholder="Confirm your password"
                    />
                    <TermsCheckbox/>

                    <button type="submit" class=move || submit_class(submitting()) disabled=submitting>
                        {move || submit_label(submitting())}
                    </button>
                </form>

                <div class="login-link">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </div>
            </div>

            <NotificationModal/>
        </div>
    }
}

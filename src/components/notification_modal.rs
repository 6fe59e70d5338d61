//! Modal showing the outcome of a signup attempt.

use leptos::prelude::*;

use crate::net::notify::Notification;

/// Renders while the shared notification slot holds a message; OK, a
/// backdrop click, or Escape dismisses it.
#[component]
pub fn NotificationModal() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notification>>>();
    let dismiss = move || notice.set(None);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" || ev.key() == "Enter" {
            ev.prevent_default();
            dismiss();
        }
    };

    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    let class = if n.is_success() {
                        "notification-modal notification-modal--success"
                    } else {
                        "notification-modal notification-modal--failure"
                    };
                    view! {
                        <div class="notification-modal__backdrop" on:click=move |_| dismiss()>
                            <div
                                class=class
                                role="alertdialog"
                                tabindex="0"
                                on:click=move |ev| ev.stop_propagation()
                                on:keydown=on_keydown
                            >
                                <p class="notification-modal__message">{n.message}</p>
                                <button class="notification-modal__ok" on:click=move |_| dismiss()>
                                    "OK"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

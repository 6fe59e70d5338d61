//! Floating support chat: an icon that toggles a small chat box.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::config::SignupConfig;
use crate::services::chat_bot::{is_activation_key, send_draft};
use crate::state::chat::ChatState;

pub(crate) fn message_class(is_bot: bool) -> &'static str {
    if is_bot { "message bot-message" } else { "message user-message" }
}

/// Chat icon plus, when open, the transcript and input row.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<SignupConfig>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|state| state.transcript().len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let mut rng = rand::rng();
        let Some(reply) = send_draft(chat, &mut rng, config.reply_delay) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let _ = reply.await;
        });
        #[cfg(not(feature = "hydrate"))]
        drop(reply);
    };

    let toggle = move |_| chat.update(ChatState::toggle_open);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-icon" on:click=toggle>
            "💬"
            <span class="chat-notification"></span>
        </div>

        <Show when=move || chat.with(|state| state.is_open)>
            <div class="chat-box">
                <div class="chat-header">
                    <h3>"Connect Support"</h3>
                    <button class="close-chat" on:click=toggle>"×"</button>
                </div>

                <div class="chat-messages" node_ref=messages_ref>
                    {move || {
                        chat.with(|state| {
                            state
                                .transcript()
                                .iter()
                                .map(|msg| {
                                    let class = message_class(msg.is_bot);
                                    let text = msg.text.clone();
                                    view! { <div class=class>{text}</div> }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </div>

                <div class="chat-input">
                    <input
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || chat.with(|state| state.draft.clone())
                        on:input=move |ev| chat.update(|state| state.set_draft(event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                    <button on:click=move |_| do_send()>"Send"</button>
                </div>
            </div>
        </Show>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SignupConfig;
use crate::net::notify::Notification;
use crate::pages::signup::SignupPage;
use crate::state::{chat::ChatState, form::FormState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page state contexts and sets up client-side routing. The
/// server provides a [`SignupConfig`] read from its environment; the browser
/// falls back to [`SignupConfig::compiled`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<SignupConfig>().unwrap_or_else(SignupConfig::compiled);
    let form = RwSignal::new(FormState::default());
    let chat = RwSignal::new(ChatState::default());
    let notice = RwSignal::new(None::<Notification>);

    provide_context(config);
    provide_context(form);
    provide_context(chat);
    provide_context(notice);

    view! {
        <Stylesheet id="leptos" href="/pkg/connect-signup.css"/>
        <Title text="Create Your Account"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SignupPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
    }
}

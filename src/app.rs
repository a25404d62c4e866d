//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    devices::DevicesPage, login::LoginPage, not_approved::NotApprovedPage, payment::PaymentPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Provides the shared auth context, restores any durable session once on
/// the client, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // One-shot durable-session restore. `AuthState::loading` stays true until
    // this has run, so route guards don't redirect before the answer is in.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::auth::restore_session;
            use crate::util::storage::LocalStore;

            match restore_session(&LocalStore) {
                Some((token, user)) => auth.set(AuthState::signed_in(token, user)),
                None => auth.update(|a| a.loading = false),
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="Portal de Dispositivos"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("devices") view=DevicesPage/>
                <Route path=StaticSegment("payment") view=PaymentPage/>
                <Route path=StaticSegment("not-approved") view=NotApprovedPage/>
            </Routes>
        </Router>
    }
}

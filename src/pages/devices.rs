//! Devices page — the normal post-login landing destination.
//!
//! Device management itself lives elsewhere; this page owns the session
//! guard (redirect to the login form when there is no session) and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Devices landing page. Redirects to `/login` if no session was restored.
#[component]
pub fn DevicesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect once the restore has settled without a user. Signing out
    // re-runs this and routes back to the form.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::state::auth::clear_session(&crate::util::storage::LocalStore);
        }
        auth.set(AuthState::signed_out());
    };

    view! {
        <div class="devices-page">
            <header class="devices-page__header">
                <h1>"Mis Dispositivos"</h1>
                <button class="btn" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </header>

            <p class="devices-page__greeting">
                {move || {
                    auth.with(|a| {
                        a.user.as_ref().map(|u| {
                            let who = u
                                .nombre
                                .clone()
                                .or_else(|| u.correo.clone())
                                .unwrap_or_else(|| u.id.clone());
                            format!("Sesión iniciada como {who}.")
                        })
                    })
                }}
            </p>
        </div>
    }
}

//! Login page: credential form, submission lifecycle, and post-login routing.

use leptos::ev;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::layout::CenteredCard;
use crate::state::login::LoginForm;

/// Login page — collects `correo`/`contraseña`, submits them once, and routes
/// to `/devices`, `/payment`, or `/not-approved` depending on the answer.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Validation gate. `None` means no call may be made: a field was
        // empty (the error is already recorded) or one is still in flight.
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::state::auth::{self, AuthState};
            use crate::state::login::Settled;
            use crate::util::storage::{LocalStore, SessionStore};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&credentials).await;

                // `settle` releases the submit control on every branch before
                // any storage write or navigation happens.
                let Some(settled) = form.try_update(|f| f.settle(result)) else {
                    return;
                };

                match settled {
                    Settled::NotApproved => {
                        navigate("/not-approved", NavigateOptions::default());
                    }
                    Settled::PaymentPending { user_id } => {
                        auth::stash_pending_user(&SessionStore, &user_id);
                        navigate("/payment", NavigateOptions::default());
                    }
                    Settled::SignedIn { token, user } => {
                        auth::persist_session(&LocalStore, &token, &user);
                        auth.set(AuthState::signed_in(token, user));
                        navigate("/devices", NavigateOptions::default());
                    }
                    Settled::Rejected => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="login-page">
            <CenteredCard>
                <div class="login-page__icon">
                    <svg viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M6.6 10.8a15.1 15.1 0 0 0 6.6 6.6l2.2-2.2a1 1 0 0 1 1-.25 11.4 11.4 0 0 0 3.6.57 1 1 0 0 1 1 1V20a1 1 0 0 1-1 1A17 17 0 0 1 3 4a1 1 0 0 1 1-1h3.5a1 1 0 0 1 1 1 11.4 11.4 0 0 0 .57 3.6 1 1 0 0 1-.25 1z"></path>
                    </svg>
                </div>

                <h2 class="login-page__title">"Iniciar Sesión"</h2>

                {move || {
                    form.with(|f| f.error().map(ToOwned::to_owned)).map(|msg| {
                        view! { <p class="login-page__error">{msg}</p> }
                    })
                }}

                <form class="login-page__form" on:submit=on_submit>
                    <input
                        class="login-page__input"
                        type="text"
                        name="correo"
                        placeholder="Correo"
                        prop:value=move || form.with(|f| f.correo.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_correo(event_target_value(&ev)));
                        }
                    />
                    <input
                        class="login-page__input"
                        type="password"
                        name="contrasena"
                        placeholder="Contraseña"
                        prop:value=move || form.with(|f| f.contrasena.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_contrasena(event_target_value(&ev)));
                        }
                    />
                    <button
                        class="btn btn--primary login-page__submit"
                        type="submit"
                        disabled=move || form.with(LoginForm::is_submitting)
                    >
                        <Show when=move || form.with(LoginForm::is_submitting)>
                            <span class="spinner" aria-hidden="true"></span>
                        </Show>
                        {move || {
                            if form.with(LoginForm::is_submitting) {
                                "Ingresando..."
                            } else {
                                "Iniciar Sesión"
                            }
                        }}
                    </button>
                </form>
            </CenteredCard>
        </div>
    }
}

//! Payment page — approved accounts with an outstanding payment step.

use leptos::prelude::*;

use crate::components::layout::CenteredCard;

/// Payment-pending page. The login flow stashes the account id in the
/// ephemeral store right before navigating here; payment processing itself
/// happens behind the network boundary.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let pending = RwSignal::new(Option::<String>::None);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        pending.set(crate::state::auth::pending_user(
            &crate::util::storage::SessionStore,
        ));
    });

    view! {
        <div class="payment-page">
            <CenteredCard>
                <h2>"Pago pendiente"</h2>
                <p>
                    "Tu cuenta está aprobada, pero falta completar el proceso de pago para continuar."
                </p>
                {move || {
                    pending.get().map(|id| {
                        view! {
                            <p class="payment-page__ref">
                                "Referencia de cuenta: " <code>{id}</code>
                            </p>
                        }
                    })
                }}
            </CenteredCard>
        </div>
    }
}

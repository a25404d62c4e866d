//! Not-approved page — accounts awaiting administrator approval.

use leptos::prelude::*;

use crate::components::layout::CenteredCard;

/// Shown when the account exists but has not been approved yet. No session
/// is stored on this path, so there is nothing to guard or clear.
#[component]
pub fn NotApprovedPage() -> impl IntoView {
    view! {
        <div class="not-approved-page">
            <CenteredCard>
                <h2>"Cuenta en revisión"</h2>
                <p>
                    "Tu cuenta aún no ha sido aprobada por un administrador. Intenta de nuevo más tarde."
                </p>
                <a href="/login" class="btn">
                    "Volver al inicio de sesión"
                </a>
            </CenteredCard>
        </div>
    }
}

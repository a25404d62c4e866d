//! Shared layout pieces.

use leptos::prelude::*;

/// Full-height centered card used by the auth-flow pages.
#[component]
pub fn CenteredCard(children: Children) -> impl IntoView {
    view! {
        <div class="centered-card">
            <div class="centered-card__body">{children()}</div>
        </div>
    }
}

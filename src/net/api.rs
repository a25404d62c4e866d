//! REST API helpers for communicating with the authentication endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a generic failure since the endpoint
//! is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as a `LoginFailed` value carrying the HTTP status code
//! when one was received, instead of an exception-shaped error the caller
//! would have to pick apart. Classification of the code into user-visible
//! behavior belongs to `state::login`, not to this module.

#![allow(clippy::unused_async)]

use super::types::{Credentials, LoginFailed, LoginOk};

/// Submit credentials to `POST /users/login`.
///
/// # Errors
///
/// Returns `LoginFailed` with the response status code on a non-2xx answer,
/// or with no code when the request never produced a response.
pub async fn login(credentials: &Credentials) -> Result<LoginOk, LoginFailed> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post("/users/login")
            .json(credentials)
            .map_err(|e| {
                leptos::logging::warn!("login request build failed: {e}");
                LoginFailed { status: None }
            })?;

        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("login request failed: {e}");
            LoginFailed { status: None }
        })?;

        if !resp.ok() {
            leptos::logging::warn!("login rejected: status={}", resp.status());
            return Err(LoginFailed { status: Some(resp.status()) });
        }

        resp.json::<LoginOk>().await.map_err(|e| {
            leptos::logging::warn!("login response decode failed: {e}");
            LoginFailed { status: None }
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(LoginFailed { status: None })
    }
}

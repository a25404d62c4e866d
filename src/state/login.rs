#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::{Credentials, LoginFailed, LoginOk, User};

/// Inline error shown when a field is left empty.
pub const MSG_MISSING_FIELDS: &str = "Por favor, completa todos los campos.";
/// Inline error shown when the server answers 402.
pub const MSG_PAYMENT_REQUIRED: &str = "Payment required. Please complete the payment process.";
/// Inline error for every other failure, including pure network errors.
pub const MSG_INVALID_CREDENTIALS: &str = "Credenciales inválidas.";

/// Submission lifecycle. Exactly one variant is active at a time; it drives
/// rendering and whether a new submission is permitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Error(String),
}

/// Login form model: field values plus the submission lifecycle.
///
/// The machine is driven from the page in two steps: `begin_submit` gates
/// validation and hands back the credentials to POST, then `settle` classifies
/// the terminal outcome of that one call.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub correo: String,
    pub contrasena: String,
    pub status: FormStatus,
}

/// Where a settled submission sends the user next.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled {
    /// Account exists but an administrator has not approved it yet. Any token
    /// in the response is discarded; nothing is persisted.
    NotApproved,
    /// Approved account with an outstanding payment step. Only the user id is
    /// stashed (ephemeral store) for the payment page.
    PaymentPending { user_id: String },
    /// Fully signed in; token and user are ready for the durable store.
    SignedIn { token: String, user: User },
    /// The call failed and an inline error has been recorded; stay on the
    /// form, no navigation.
    Rejected,
}

impl LoginForm {
    pub fn set_correo(&mut self, value: String) {
        self.correo = value;
    }

    pub fn set_contrasena(&mut self, value: String) {
        self.contrasena = value;
    }

    /// Whether a call is in flight. The submit control is disabled while true.
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// The inline error message, if one is being shown.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Error(msg) => Some(msg),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    /// Gate a submission attempt.
    ///
    /// Returns the credentials to POST when the attempt is allowed, entering
    /// `Submitting` and clearing any prior error. Returns `None` without side
    /// effects while a call is already in flight, and `None` with the
    /// missing-fields error when either field is empty — no network call may
    /// be made in either case.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        if self.correo.is_empty() || self.contrasena.is_empty() {
            self.status = FormStatus::Error(MSG_MISSING_FIELDS.to_owned());
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(Credentials {
            correo: self.correo.clone(),
            contrasena: self.contrasena.clone(),
        })
    }

    /// Classify the terminal outcome of the login call.
    ///
    /// Always leaves `Submitting`, whatever the branch: navigation outcomes
    /// settle back to `Idle`, rejections to `Error`. A 403 means the account
    /// was not approved and routes like the success case rather than showing
    /// an inline error; a failure without a status code (no response at all)
    /// takes the generic branch even though a 402 body may have been on the
    /// wire.
    pub fn settle(&mut self, result: Result<LoginOk, LoginFailed>) -> Settled {
        let settled = match result {
            Ok(ok) if !ok.user.is_approved => Settled::NotApproved,
            Ok(ok) if ok.requires_payment => Settled::PaymentPending { user_id: ok.user.id },
            Ok(ok) => Settled::SignedIn {
                token: ok.token,
                user: ok.user,
            },
            Err(LoginFailed { status: Some(403) }) => Settled::NotApproved,
            Err(LoginFailed { status: Some(402) }) => {
                self.status = FormStatus::Error(MSG_PAYMENT_REQUIRED.to_owned());
                return Settled::Rejected;
            }
            Err(_) => {
                self.status = FormStatus::Error(MSG_INVALID_CREDENTIALS.to_owned());
                return Settled::Rejected;
            }
        };
        self.status = FormStatus::Idle;
        settled
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credential pair POSTed to `/users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub correo: String,
    pub contrasena: String,
}

/// Account returned by the login endpoint.
///
/// Field names follow the server's JSON contract (`_id`, `isApproved`);
/// serialization keeps the wire names so the persisted copy in the durable
/// store matches what the server sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
    #[serde(rename = "isApproved")]
    pub is_approved: bool,
}

/// Successful login response body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginOk {
    pub token: String,
    pub user: User,
    #[serde(rename = "requiresPayment", default)]
    pub requires_payment: bool,
}

/// Failed login call.
///
/// `status` is `None` when no HTTP response was received at all (network
/// failure, undecodable body). Callers classify on the status code; the
/// `None` case always falls through to the generic failure branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginFailed {
    pub status: Option<u16>,
}

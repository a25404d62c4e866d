//! Page components, one per route.

pub mod devices;
pub mod login;
pub mod not_approved;
pub mod payment;

//! Caller identity
//!
//! Customers are authenticated upstream; the gateway forwards the signed-in
//! customer in `x-user-id` and the browser's guest session in `x-session-id`.

pub(crate) mod middleware;

pub(crate) const USER_HEADER: &str = "x-user-id";
pub(crate) const SESSION_HEADER: &str = "x-session-id";

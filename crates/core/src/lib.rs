//! Storefront
//!
//! Domain core for the storefront: catalog values, shopping carts with
//! stock-ceiling rules and login-time reconciliation, and the order lifecycle.

pub mod cart;
pub mod catalog;
pub mod customers;
pub mod orders;
pub mod uuids;
pub mod values;

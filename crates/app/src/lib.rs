//! Storefront application services, persistence ports and their in-memory
//! implementations.

pub mod context;
pub mod domain;
pub mod notifications;
pub mod storage;

#[cfg(test)]
mod test;

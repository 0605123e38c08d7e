//! Customers & Sessions

use crate::uuids::TypedUuid;

/// Authenticated customer marker
#[derive(Debug)]
pub struct User;

/// Authenticated customer UUID
pub type UserUuid = TypedUuid<User>;

/// Anonymous browsing session marker
#[derive(Debug)]
pub struct GuestSession;

/// Anonymous browsing session UUID
pub type SessionUuid = TypedUuid<GuestSession>;

/// Shipping address marker
#[derive(Debug)]
pub struct Address;

/// Shipping address UUID
pub type AddressUuid = TypedUuid<Address>;

//! Caller identity stored in the depot.

use salvo::prelude::{Depot, StatusError};

use storefront::customers::{SessionUuid, UserUuid};
use storefront_app::domain::carts::models::CartOwner;

const IDENTITY_DEPOT_KEY: &str = "identity";

/// Who is calling: a signed-in customer, a guest session, both or neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Identity {
    pub(crate) user: Option<UserUuid>,
    pub(crate) session: Option<SessionUuid>,
}

impl Identity {
    /// The cart this caller works on. A signed-in customer always uses their
    /// own cart, even when a guest session is also present.
    pub(crate) fn cart_owner(self) -> Option<CartOwner> {
        self.user
            .map(CartOwner::Customer)
            .or_else(|| self.session.map(CartOwner::Guest))
    }
}

pub(crate) trait IdentityExt {
    fn insert_identity(&mut self, identity: Identity);

    fn identity(&self) -> Identity;

    fn cart_owner_or_401(&self) -> Result<CartOwner, StatusError>;

    fn customer_or_401(&self) -> Result<UserUuid, StatusError>;

    fn guest_session_or_400(&self) -> Result<SessionUuid, StatusError>;
}

impl IdentityExt for Depot {
    fn insert_identity(&mut self, identity: Identity) {
        self.insert(IDENTITY_DEPOT_KEY, identity);
    }

    fn identity(&self) -> Identity {
        self.get::<Identity>(IDENTITY_DEPOT_KEY)
            .copied()
            .unwrap_or_default()
    }

    fn cart_owner_or_401(&self) -> Result<CartOwner, StatusError> {
        self.identity()
            .cart_owner()
            .ok_or_else(|| StatusError::unauthorized().brief("Missing customer or guest session"))
    }

    fn customer_or_401(&self) -> Result<UserUuid, StatusError> {
        self.identity()
            .user
            .ok_or_else(|| StatusError::unauthorized().brief("Sign in required"))
    }

    fn guest_session_or_400(&self) -> Result<SessionUuid, StatusError> {
        self.identity()
            .session
            .ok_or_else(|| StatusError::bad_request().brief("Missing guest session"))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn customer_takes_precedence_over_guest_session() {
        let user = UserUuid::from_uuid(Uuid::nil());

        let identity = Identity {
            user: Some(user),
            session: Some(SessionUuid::new()),
        };

        assert_eq!(identity.cart_owner(), Some(CartOwner::Customer(user)));
    }

    #[test]
    fn guest_session_owns_cart_when_signed_out() {
        let session = SessionUuid::new();

        let identity = Identity {
            user: None,
            session: Some(session),
        };

        assert_eq!(identity.cart_owner(), Some(CartOwner::Guest(session)));
        assert_eq!(Identity::default().cart_owner(), None);
    }

    #[test]
    fn missing_identity_is_rejected() {
        let depot = Depot::new();

        assert!(depot.cart_owner_or_401().is_err());
        assert!(depot.customer_or_401().is_err());
        assert!(depot.guest_session_or_400().is_err());
    }
}

//! Identity middleware.

use std::str::FromStr;

use salvo::prelude::*;

use storefront::customers::{SessionUuid, UserUuid};

use crate::{
    extensions::*,
    identity::{SESSION_HEADER, USER_HEADER},
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let user = match header_uuid::<UserUuid>(req, USER_HEADER) {
        Ok(user) => user,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let session = match header_uuid::<SessionUuid>(req, SESSION_HEADER) {
        Ok(session) => session,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    depot.insert_identity(Identity { user, session });

    ctrl.call_next(req, depot, res).await;
}

fn header_uuid<T: FromStr>(req: &Request, name: &str) -> Result<Option<T>, StatusError> {
    let Some(value) = req.headers().get(name) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .map(Some)
        .ok_or_else(|| invalid_header(name))
}

fn invalid_header(name: &str) -> StatusError {
    StatusError::bad_request().brief(format!("Invalid {name} header"))
}

//! Cookie-backed admin session: the bearer token is the identity, the profile
//! lives next to it in the session store.

use std::future::{Ready, ready};

use actix_identity::{Identity, IdentityExt};
use actix_session::SessionExt;
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use log::warn;

use crate::domain::session::{AdminProfile, AdminSession};
use crate::domain::types::BearerToken;

/// Session key holding the serialized [`AdminProfile`].
pub const PROFILE_KEY: &str = "adminUser";

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(session_from_request(req))
    }
}

fn session_from_request(req: &HttpRequest) -> Result<AdminSession, Error> {
    let identity = req
        .get_identity()
        .map_err(|_| ErrorUnauthorized("not signed in"))?;
    let token = identity
        .id()
        .map_err(|_| ErrorUnauthorized("not signed in"))?;
    let token = BearerToken::new(token).map_err(|_| ErrorUnauthorized("not signed in"))?;

    let profile = match req.get_session().get::<AdminProfile>(PROFILE_KEY) {
        Ok(profile) => profile.unwrap_or_default(),
        Err(err) => {
            warn!("Discarding unreadable admin profile: {err}");
            AdminProfile::default()
        }
    };

    Ok(AdminSession::new(token, profile))
}

/// Persists `session` for subsequent requests.
pub fn start(req: &HttpRequest, session: &AdminSession) -> Result<(), Error> {
    Identity::login(&req.extensions(), session.token().as_str().to_string())
        .map_err(ErrorInternalServerError)?;
    req.get_session()
        .insert(PROFILE_KEY, session.profile())
        .map_err(ErrorInternalServerError)?;
    Ok(())
}

/// Drops the credential and the profile.
pub fn end(req: &HttpRequest, identity: Identity) {
    identity.logout();
    req.get_session().purge();
}

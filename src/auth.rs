use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use argon2::Argon2;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    rand_core::OsRng,
};
use serde::{Deserialize, Serialize};

use crate::domain::member::Member;

/// Claims for the signed-in member, serialized into the session cookie at
/// login and decoded on every request by the extractor below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedMember {
    /// Member id.
    pub sub: i32,
    pub email: String,
    /// Display name shown in the header.
    pub name: String,
    pub is_admin: bool,
}

impl AuthenticatedMember {
    /// Serialize the claims for `Identity::login`.
    pub fn to_session_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&Member> for AuthenticatedMember {
    fn from(member: &Member) -> Self {
        Self {
            sub: member.id,
            email: member.email.clone(),
            name: member.full_name(),
            is_admin: member.is_admin,
        }
    }
}

impl FromRequest for AuthenticatedMember {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => match identity.id() {
                // An undecodable session counts as signed out.
                Ok(raw) => serde_json::from_str::<AuthenticatedMember>(&raw)
                    .map_err(|_| ErrorUnauthorized("invalid session")),
                Err(_) => Err(ErrorUnauthorized("invalid session")),
            },
            Err(_) => Err(ErrorUnauthorized("not signed in")),
        };
        ready(result)
    }
}

/// Hash a member password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a candidate password against a stored PHC string.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordHashError> {
    let parsed_hash = PasswordHash::new(stored_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(err) => Err(err),
    }
}

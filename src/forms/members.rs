use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 64;
const PHONE_MAX_LEN: u64 = 32;
const PASSWORD_MIN_LEN: u64 = 8;
const PASSWORD_MAX_LEN: u64 = 128;

/// Result type returned by the member form helpers.
pub type MemberFormResult<T> = Result<T, MemberFormError>;

/// Errors that can occur while processing sign-in and sign-up forms.
#[derive(Debug, Error)]
pub enum MemberFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("name cannot be empty")]
    EmptyName,
}

/// Query string accepted by the sign-in page; `next` is the guarded path the
/// member was heading to.
#[derive(Debug, Default, Deserialize)]
pub struct SignInQuery {
    pub next: Option<String>,
}

/// Normalized credentials produced by the sign-in form.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Form payload emitted by the sign-in page.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    /// Guarded path to return to after signing in.
    #[serde(default)]
    pub next: Option<String>,
}

impl SignInForm {
    /// Validates the payload into lowercased credentials.
    pub fn into_credentials(self) -> MemberFormResult<Credentials> {
        self.validate()?;

        Ok(Credentials {
            email: self.email.trim().to_lowercase(),
            password: self.password,
        })
    }
}

/// Normalized payload produced by the sign-up form.
#[derive(Debug)]
pub struct SignUpPayload {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

/// Form payload emitted by the sign-up page.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LEN, max = PASSWORD_MAX_LEN))]
    pub password: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub first_name: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub last_name: String,
    #[validate(length(max = PHONE_MAX_LEN))]
    #[serde(default)]
    pub phone: Option<String>,
}

impl SignUpForm {
    /// Validates and sanitizes the payload for member creation.
    pub fn into_payload(self) -> MemberFormResult<SignUpPayload> {
        self.validate()?;

        let first_name = sanitize_inline_text(&self.first_name);
        let last_name = sanitize_inline_text(&self.last_name);
        if first_name.is_empty() || last_name.is_empty() {
            return Err(MemberFormError::EmptyName);
        }

        let phone = self
            .phone
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty());

        Ok(SignUpPayload {
            email: self.email.trim().to_lowercase(),
            password: self.password,
            first_name,
            last_name,
            phone,
        })
    }
}

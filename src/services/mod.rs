use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod admin;
pub mod cart;
pub mod members;
pub mod store;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer; routes match on these to pick a
/// flash message and redirect target.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not authorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    Conflict,
    #[error("{0}")]
    Form(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            other => ServiceError::Repository(other),
        }
    }
}

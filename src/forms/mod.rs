//! Form definitions backing the admin routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod faqs;
pub mod products;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("access token is required")]
    MissingToken,

    #[error("invalid name")]
    InvalidName,

    #[error("question and answer are required")]
    InvalidFaq,

    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

impl From<TypeConstraintError> for FormError {
    fn from(err: TypeConstraintError) -> Self {
        match err {
            TypeConstraintError::InvalidValue(value) => FormError::InvalidStatus(value),
            other => FormError::InvalidStatus(other.to_string()),
        }
    }
}

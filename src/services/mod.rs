//! Request-level workflows shared by the route handlers.

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;

pub mod articles;
pub mod auth;
pub mod dashboard;
pub mod faqs;
pub mod listing;
pub mod products;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// User input failed validation; the message is shown as is.
    #[error("{0}")]
    Form(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(#[from] TypeConstraintError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        let message = match err {
            FormError::Validation(_) => "Please fill in all required fields.".to_string(),
            FormError::InvalidFaq => {
                "Please fill in both the question and the answer.".to_string()
            }
            FormError::MissingToken => "Access token is required.".to_string(),
            FormError::InvalidName => "Name is required.".to_string(),
            FormError::InvalidEmail => "Invalid email address.".to_string(),
            FormError::InvalidStatus(value) => format!("Unknown status: {value}"),
        };
        ServiceError::Form(message)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

use serde::Deserialize;
use validator::{Validate, ValidateEmail};

use crate::domain::session::{AdminProfile, AdminSession};
use crate::domain::types::{BearerToken, DisplayName};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Sign-in form; the token is issued by the backend out of band.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

impl TryFrom<LoginForm> for AdminSession {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let token = BearerToken::new(form.token).map_err(|_| FormError::MissingToken)?;
        let full_name = DisplayName::new(form.full_name).map_err(|_| FormError::InvalidName)?;

        let email = form.email.trim();
        let email = if email.is_empty() {
            None
        } else if email.validate_email() {
            Some(email.to_string())
        } else {
            return Err(FormError::InvalidEmail);
        };

        Ok(AdminSession::new(
            token,
            AdminProfile {
                full_name: full_name.into_inner(),
                email,
            },
        ))
    }
}

use serde::Deserialize;
use validator::Validate;

use crate::domain::faq::NewFaq;
use crate::domain::types::FaqText;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for adding or editing a FAQ entry.
pub struct FaqForm {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 5000))]
    pub answer: String,
}

/// Drops unsafe markup from user-supplied FAQ text.
fn sanitize(value: &str) -> String {
    ammonia::clean(value)
}

impl TryFrom<FaqForm> for NewFaq {
    type Error = FormError;

    fn try_from(form: FaqForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let question = FaqText::new(sanitize(&form.question)).map_err(|_| FormError::InvalidFaq)?;
        let answer = FaqText::new(sanitize(&form.answer)).map_err(|_| FormError::InvalidFaq)?;

        Ok(NewFaq::new(question, answer))
    }
}

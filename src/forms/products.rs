use serde::Deserialize;
use validator::Validate;

use crate::domain::product::ProductStatus;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Status dropdown submitted from a product row.
pub struct ProductStatusForm {
    #[validate(length(min = 1, max = 32))]
    pub status: String,
}

impl TryFrom<ProductStatusForm> for ProductStatus {
    type Error = FormError;

    fn try_from(form: ProductStatusForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(ProductStatus::parse_assignable(&form.status)?)
    }
}

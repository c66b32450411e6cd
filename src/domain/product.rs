use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{RecordId, TypeConstraintError, null_as_default};
use crate::domain::user::UserRef;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Product {
    #[serde(rename(deserialize = "_id"))]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    pub description: Option<String>,
    #[serde(rename(deserialize = "categoryId"))]
    pub category: Option<CategoryRef>,
    #[serde(rename(deserialize = "subCategoryId"))]
    pub sub_category: Option<CategoryRef>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProductStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_free: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename(deserialize = "userId"))]
    pub seller: Option<UserRef>,
}

/// Populated category or sub-category reference.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoryRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Moderation status of a listed product.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
    Other(String),
}

impl ProductStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProductStatus::Approved => "Approved",
            ProductStatus::Pending => "Pending",
            ProductStatus::Rejected => "Rejected",
            ProductStatus::Other(value) => value,
        }
    }

    /// Parses one of the statuses an administrator may assign.
    pub fn parse_assignable(value: &str) -> Result<Self, TypeConstraintError> {
        match ProductStatus::from(value.trim().to_string()) {
            ProductStatus::Other(other) => Err(TypeConstraintError::InvalidValue(other)),
            status => Ok(status),
        }
    }
}

impl From<String> for ProductStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Approved" => ProductStatus::Approved,
            "Pending" => ProductStatus::Pending,
            "Rejected" => ProductStatus::Rejected,
            _ => ProductStatus::Other(value),
        }
    }
}

impl From<ProductStatus> for String {
    fn from(value: ProductStatus) -> Self {
        value.as_str().to_string()
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_populated_product() {
        let raw = r#"{
            "_id": "p1",
            "name": "Desk lamp",
            "price": 12.5,
            "categoryId": {"name": "Home"},
            "subCategoryId": {"name": "Lighting"},
            "status": "Approved",
            "isFree": false,
            "userId": {"fullName": "Sam Seller"}
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();

        assert_eq!(product.status, ProductStatus::Approved);
        assert_eq!(product.category.unwrap().name, "Home");
        assert_eq!(product.seller.unwrap().full_name, "Sam Seller");
        assert_eq!(product.image, None);
    }

    #[test]
    fn parse_assignable_rejects_unknown_status() {
        assert_eq!(
            ProductStatus::parse_assignable(" Rejected "),
            Ok(ProductStatus::Rejected)
        );
        assert!(ProductStatus::parse_assignable("Archived").is_err());
    }

    #[test]
    fn null_scalars_decode_as_defaults() {
        let raw = r#"{
            "_id": "p1",
            "name": "Lamp",
            "price": null,
            "status": null,
            "isFree": null,
            "categoryId": null
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();

        assert_eq!(product.price, 0.0);
        assert_eq!(product.status, ProductStatus::default());
        assert!(!product.is_free);
        assert_eq!(product.category, None);
    }
}

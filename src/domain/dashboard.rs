use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{RecordId, null_as_default, string_or_number};
use crate::domain::user::UserRef;

/// Aggregate counters shown on the dashboard cards.
///
/// `Default` is the zeroed fallback rendered when the summary cannot be loaded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_products: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_articles: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_transactions: f64,
}

/// One month of the yearly revenue series.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    #[serde(deserialize_with = "string_or_number")]
    pub month: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Transaction {
    #[serde(rename(deserialize = "_id"))]
    pub id: RecordId,
    #[serde(rename(deserialize = "userId"))]
    pub user: Option<UserRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

//! Capabilities the admin views consume from the remote backend.
//!
//! Every call takes the [`AdminSession`] explicitly; nothing reads the
//! credential from ambient state.
#![allow(async_fn_in_trait)]

use crate::{
    api::errors::ApiResult,
    domain::{
        dashboard::{DashboardSummary, RevenuePoint, Transaction},
        faq::{Faq, NewFaq},
        session::AdminSession,
        types::RecordId,
    },
    listing::{ListQuery, ListResult, Record, StatusFilter},
};

pub mod errors;
#[cfg(feature = "server")]
pub mod http;

/// State-changing action applied to a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<S> {
    Delete,
    UpdateStatus(S),
}

/// Paged, searchable, filterable list of records.
pub trait ListSource {
    type Item: Record;
    type Filter: StatusFilter;

    async fn fetch_page(
        &self,
        session: &AdminSession,
        query: &ListQuery<Self::Filter>,
    ) -> ApiResult<ListResult<Self::Item>>;
}

/// Fire-and-confirm mutations; callers apply no local change before `Ok`.
pub trait MutationGateway {
    type Status;

    async fn mutate(
        &self,
        session: &AdminSession,
        id: &RecordId,
        mutation: &Mutation<Self::Status>,
    ) -> ApiResult<()>;
}

pub trait FaqReader {
    /// Full, unpaginated FAQ list. Public endpoint, no credential.
    async fn list_faqs(&self) -> ApiResult<Vec<Faq>>;
}

pub trait FaqWriter {
    async fn add_faq(&self, session: &AdminSession, faq: &NewFaq) -> ApiResult<()>;
    async fn update_faq(&self, session: &AdminSession, id: &RecordId, faq: &NewFaq)
    -> ApiResult<()>;
    async fn delete_faq(&self, session: &AdminSession, id: &RecordId) -> ApiResult<()>;
}

pub trait DashboardReader {
    async fn summary(&self, session: &AdminSession) -> ApiResult<DashboardSummary>;
    async fn revenue(&self, session: &AdminSession, year: i32) -> ApiResult<Vec<RevenuePoint>>;
    async fn recent_transactions(&self, session: &AdminSession) -> ApiResult<Vec<Transaction>>;
}

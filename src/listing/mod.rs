//! List synchronization core shared by the paged admin views.

use std::convert::Infallible;
use std::fmt::Debug;

use crate::domain::article::Article;
use crate::domain::faq::Faq;
use crate::domain::product::{Product, ProductStatus};
use crate::domain::types::RecordId;
use crate::domain::user::{User, UserStatus};
use crate::pagination;

pub mod controller;
pub mod filter;
pub mod notify;

/// Page size used by every paged admin list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A backend record that can be targeted by a mutation.
pub trait Record {
    fn id(&self) -> &RecordId;
}

impl Record for User {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Product {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Article {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for Faq {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Status dropdown value of a list view.
pub trait StatusFilter: Clone + Debug + PartialEq {
    /// Parses a submitted dropdown value; the "all" option yields `None`.
    fn from_filter_value(raw: &str) -> Option<Self>;

    /// Value sent to the backend and echoed back to the dropdown.
    fn filter_value(&self) -> &str;
}

impl StatusFilter for UserStatus {
    fn from_filter_value(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" | "ALL" | "all" => None,
            value => Some(UserStatus::from(value.to_uppercase())),
        }
    }

    fn filter_value(&self) -> &str {
        self.as_str()
    }
}

impl StatusFilter for ProductStatus {
    fn from_filter_value(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" | "ALL" | "all" => None,
            value => Some(ProductStatus::from(value.to_string())),
        }
    }

    fn filter_value(&self) -> &str {
        self.as_str()
    }
}

/// Lists without a status dropdown.
impl StatusFilter for Infallible {
    fn from_filter_value(_raw: &str) -> Option<Self> {
        None
    }

    fn filter_value(&self) -> &str {
        match *self {}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub status: Option<F>,
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            status: None,
        }
    }
}

impl<F> ListQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into().trim().to_string();
        self
    }

    pub fn status(mut self, status: Option<F>) -> Self {
        self.status = status;
        self
    }
}

/// One page of records together with the size of the whole result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self { items, total_count }
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        pagination::total_pages(self.total_count, page_size)
    }
}

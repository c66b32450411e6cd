use serde::{Deserialize, Serialize};

use crate::listing::notify::Notification;
use crate::listing::{ListQuery, StatusFilter};
use crate::pagination::Paginated;

/// Query parameters shared by the paged list pages and their mutation forms.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ListParams {
    pub fn to_query<F: StatusFilter>(&self) -> ListQuery<F> {
        ListQuery::new()
            .page(self.page.unwrap_or(1))
            .search(self.search.as_deref().unwrap_or_default())
            .status(self.status.as_deref().and_then(F::from_filter_value))
    }

    /// Parameters that reproduce `query`; blank search and "all" are omitted.
    pub fn from_query<F: StatusFilter>(query: &ListQuery<F>) -> Self {
        Self {
            page: Some(query.page),
            search: (!query.search.is_empty()).then(|| query.search.clone()),
            status: query
                .status
                .as_ref()
                .map(|status| status.filter_value().to_string()),
        }
    }
}

/// Data required to render one page of a list view.
pub struct ListPageData<T> {
    pub list: Paginated<T>,
    /// Submitted search term echoed back into the search box.
    pub search: String,
    /// Selected dropdown value, `None` for "all".
    pub status: Option<String>,
    /// `false` until a fetch has succeeded; drives the empty vs. error state.
    pub loaded: bool,
    pub notifications: Vec<Notification>,
}

/// Outcome of a list mutation: the list to return to and what to report.
pub struct ListRedirect {
    pub params: ListParams,
    pub notifications: Vec<Notification>,
}

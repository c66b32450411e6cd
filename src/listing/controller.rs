//! Generic controller behind every paged admin list.
//!
//! The controller owns the query (page, search, status filter), turns each
//! user action into exactly one authoritative fetch and exposes the
//! `(items, loading, page window)` triple the templates render.

use log::{debug, error, info, warn};

use crate::api::errors::ApiResult;
use crate::api::{ListSource, Mutation, MutationGateway};
use crate::domain::session::AdminSession;
use crate::domain::types::RecordId;
use crate::listing::notify::{Notification, Notifier};
use crate::listing::{ListQuery, ListResult, Record};
use crate::pagination::{self, Paginated};

/// Wording used in the notifications of one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLabels {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl ListLabels {
    pub fn load_failed(&self) -> String {
        format!("Failed to load {}. Please try again.", self.plural)
    }

    pub fn deleted(&self) -> String {
        format!("{} deleted successfully", capitalize(self.singular))
    }

    pub fn delete_failed(&self) -> String {
        format!("Failed to delete {}. Please try again.", self.singular)
    }

    pub fn status_updated(&self) -> String {
        format!("{} status updated successfully", capitalize(self.singular))
    }

    pub fn status_failed(&self) -> String {
        format!(
            "Failed to update {} status. Please try again.",
            self.singular
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Handle for an issued fetch; only the most recent ticket is applied.
#[derive(Debug)]
pub struct FetchTicket<F> {
    generation: u64,
    query: ListQuery<F>,
}

impl<F> FetchTicket<F> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &ListQuery<F> {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer fetch was issued before this one completed.
    Stale,
}

pub struct ListController<'a, S, N>
where
    S: ListSource,
{
    source: &'a S,
    session: &'a AdminSession,
    notifier: &'a N,
    labels: ListLabels,
    query: ListQuery<S::Filter>,
    pending_search: String,
    items: Vec<S::Item>,
    total_pages: usize,
    loading: bool,
    loaded: bool,
    generation: u64,
}

impl<'a, S, N> ListController<'a, S, N>
where
    S: ListSource,
    N: Notifier,
{
    pub fn new(
        source: &'a S,
        session: &'a AdminSession,
        notifier: &'a N,
        labels: ListLabels,
    ) -> Self {
        Self {
            source,
            session,
            notifier,
            labels,
            query: ListQuery::new(),
            pending_search: String::new(),
            items: Vec::new(),
            total_pages: 1,
            loading: false,
            loaded: false,
            generation: 0,
        }
    }

    /// Restores a query carried by the incoming request.
    pub fn with_query(mut self, query: ListQuery<S::Filter>) -> Self {
        self.pending_search = query.search.clone();
        self.query = query;
        self
    }

    pub fn labels(&self) -> ListLabels {
        self.labels
    }

    pub fn query(&self) -> &ListQuery<S::Filter> {
        &self.query
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn current_page(&self) -> usize {
        self.query.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether at least one fetch has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn page_window(&self) -> Vec<usize> {
        pagination::page_window(self.query.page, self.total_pages)
    }

    pub fn into_paginated(self) -> Paginated<S::Item> {
        Paginated::new(self.items, self.query.page, self.total_pages)
    }

    /// Updates the search box text without fetching.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.pending_search = term.into();
    }

    pub async fn submit_search(&mut self) {
        self.query.search = self.pending_search.trim().to_string();
        self.query.page = 1;
        self.fetch().await;
    }

    pub async fn set_status_filter(&mut self, status: Option<S::Filter>) {
        self.query.status = status;
        self.query.page = 1;
        self.fetch().await;
    }

    /// Navigates to `page`; returns `false` without fetching when the page is
    /// out of range or already current.
    pub async fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages || page == self.query.page {
            debug!(
                "Ignoring navigation to page {page} of {} ({} pages)",
                self.labels.plural, self.total_pages
            );
            return false;
        }

        self.query.page = page;
        self.fetch().await;
        true
    }

    /// Starts a fetch for the current query and supersedes any earlier one.
    pub fn begin_fetch(&mut self) -> FetchTicket<S::Filter> {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Applies the result of `ticket` unless a newer fetch has been issued.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket<S::Filter>,
        result: ApiResult<ListResult<S::Item>>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale {} response (generation {}, current {})",
                self.labels.plural, ticket.generation, self.generation
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;

        match result {
            Ok(result) => {
                self.total_pages = result.total_pages(ticket.query.page_size);
                self.items = result.items;
                self.loaded = true;
                FetchOutcome::Applied
            }
            Err(err) => {
                error!("Failed to load {}: {err}", self.labels.plural);
                self.notifier
                    .notify(Notification::error(self.labels.load_failed()));
                FetchOutcome::Failed
            }
        }
    }

    /// Fetches the current query; keeps the last loaded items on failure.
    pub async fn fetch(&mut self) {
        if self.fetch_once().await == FetchOutcome::Applied && self.query.page > self.total_pages
        {
            debug!(
                "Clamping {} page {} to {}",
                self.labels.plural, self.query.page, self.total_pages
            );
            self.query.page = self.total_pages;
            self.fetch_once().await;
        }
    }

    async fn fetch_once(&mut self) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let source = self.source;
        let result = source.fetch_page(self.session, &ticket.query).await;
        self.finish_fetch(ticket, result)
    }
}

impl<'a, S, N> ListController<'a, S, N>
where
    S: ListSource + MutationGateway,
    N: Notifier,
{
    /// Deletes a record and resynchronizes the current page on success.
    pub async fn delete_item(&mut self, id: &RecordId) -> bool {
        let source = self.source;
        match source.mutate(self.session, id, &Mutation::Delete).await {
            Ok(()) => {
                info!("Deleted {} {id}", self.labels.singular);
                self.notifier
                    .notify(Notification::success(self.labels.deleted()));
                self.fetch().await;
                if self.items.iter().any(|item| item.id() == id) {
                    warn!(
                        "{} {id} is still listed after deletion",
                        self.labels.singular
                    );
                }
                true
            }
            Err(err) => {
                error!("Failed to delete {} {id}: {err}", self.labels.singular);
                self.notifier
                    .notify(Notification::error(self.labels.delete_failed()));
                false
            }
        }
    }

    /// Changes the status of a record and resynchronizes on success.
    pub async fn mutate_status(&mut self, id: &RecordId, status: S::Status) -> bool {
        let source = self.source;
        match source
            .mutate(self.session, id, &Mutation::UpdateStatus(status))
            .await
        {
            Ok(()) => {
                info!("Updated status of {} {id}", self.labels.singular);
                self.notifier
                    .notify(Notification::success(self.labels.status_updated()));
                self.fetch().await;
                true
            }
            Err(err) => {
                error!(
                    "Failed to update status of {} {id}: {err}",
                    self.labels.singular
                );
                self.notifier
                    .notify(Notification::error(self.labels.status_failed()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::api::errors::ApiError;
    use crate::domain::session::AdminProfile;
    use crate::domain::types::BearerToken;
    use crate::domain::user::UserStatus;
    use crate::listing::notify::{AlertLevel, Notifications};

    const LABELS: ListLabels = ListLabels {
        singular: "user",
        plural: "users",
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
    }

    impl Record for Row {
        fn id(&self) -> &RecordId {
            &self.id
        }
    }

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter()
            .map(|id| Row {
                id: RecordId::new(*id).unwrap(),
            })
            .collect()
    }

    #[derive(Default)]
    struct FakeSource {
        pages: RefCell<VecDeque<ApiResult<ListResult<Row>>>>,
        calls: RefCell<Vec<ListQuery<UserStatus>>>,
        mutation_results: RefCell<VecDeque<ApiResult<()>>>,
        mutations: RefCell<Vec<(RecordId, Mutation<String>)>>,
    }

    impl FakeSource {
        fn with_pages(pages: Vec<ApiResult<ListResult<Row>>>) -> Self {
            Self {
                pages: RefCell::new(pages.into()),
                ..Self::default()
            }
        }

        fn push_mutation_result(&self, result: ApiResult<()>) {
            self.mutation_results.borrow_mut().push_back(result);
        }
    }

    impl ListSource for FakeSource {
        type Item = Row;
        type Filter = UserStatus;

        async fn fetch_page(
            &self,
            _session: &AdminSession,
            query: &ListQuery<UserStatus>,
        ) -> ApiResult<ListResult<Row>> {
            self.calls.borrow_mut().push(query.clone());
            self.pages
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(ListResult::new(vec![], 0)))
        }
    }

    impl MutationGateway for FakeSource {
        type Status = String;

        async fn mutate(
            &self,
            _session: &AdminSession,
            id: &RecordId,
            mutation: &Mutation<String>,
        ) -> ApiResult<()> {
            self.mutations
                .borrow_mut()
                .push((id.clone(), mutation.clone()));
            self.mutation_results
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(()))
        }
    }

    fn session() -> AdminSession {
        AdminSession::new(
            BearerToken::new("token").unwrap(),
            AdminProfile::default(),
        )
    }

    fn failure() -> ApiResult<ListResult<Row>> {
        Err(ApiError::RequestFailed("503 Service Unavailable".to_string()))
    }

    #[tokio::test]
    async fn fetch_replaces_items_and_total_pages() {
        let source = FakeSource::with_pages(vec![Ok(ListResult::new(rows(&["a", "b"]), 25))]);
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS);

        controller.fetch().await;

        assert_eq!(controller.items(), rows(&["a", "b"]).as_slice());
        assert_eq!(controller.total_pages(), 3);
        assert!(!controller.is_loading());
        assert!(controller.is_loaded());
        assert!(notices.is_empty());
        assert_eq!(controller.page_window(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_last_items_and_notifies_once() {
        let source = FakeSource::with_pages(vec![
            Ok(ListResult::new(rows(&["a"]), 30)),
            failure(),
        ]);
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS);

        controller.fetch().await;
        assert!(controller.go_to_page(2).await);

        assert_eq!(controller.items(), rows(&["a"]).as_slice());
        assert!(!controller.is_loading());
        assert_eq!(notices.count(AlertLevel::Error), 1);
        assert_eq!(
            notices.take()[0].message,
            "Failed to load users. Please try again."
        );
    }

    #[tokio::test]
    async fn go_to_page_out_of_range_is_noop() {
        let source = FakeSource::with_pages(vec![Ok(ListResult::new(rows(&["a"]), 40))]);
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS);
        controller.fetch().await;

        assert!(!controller.go_to_page(0).await);
        assert!(!controller.go_to_page(5).await);
        assert!(!controller.go_to_page(1).await);

        assert_eq!(source.calls.borrow().len(), 1);
        assert_eq!(controller.current_page(), 1);
    }

    #[tokio::test]
    async fn go_to_page_fetches_requested_page() {
        let source = FakeSource::with_pages(vec![
            Ok(ListResult::new(rows(&["a"]), 40)),
            Ok(ListResult::new(rows(&["d"]), 40)),
        ]);
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS);
        controller.fetch().await;

        assert!(controller.go_to_page(4).await);

        assert_eq!(source.calls.borrow()[1].page, 4);
        assert_eq!(controller.items(), rows(&["d"]).as_slice());
    }

    #[tokio::test]
    async fn search_is_committed_only_on_submit() {
        let source = FakeSource::default();
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS)
            .with_query(ListQuery::new().page(3));

        controller.set_search_term("  jane ");
        assert!(source.calls.borrow().is_empty());
        assert_eq!(controller.query().search, "");

        controller.submit_search().await;

        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search, "jane");
        assert_eq!(calls[0].page, 1);
    }

    #[tokio::test]
    async fn status_filter_resets_page_and_fetches() {
        let source = FakeSource::default();
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS)
            .with_query(ListQuery::new().page(2).search("jane"));

        controller
            .set_status_filter(Some(UserStatus::Inactive))
            .await;

        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page, 1);
        assert_eq!(calls[0].search, "jane");
        assert_eq!(calls[0].status, Some(UserStatus::Inactive));
    }

    #[tokio::test]
    async fn failed_delete_leaves_list_unchanged() {
        let source = FakeSource::with_pages(vec![Ok(ListResult::new(rows(&["a", "b"]), 2))]);
        source.push_mutation_result(Err(ApiError::RequestFailed("500".to_string())));
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS);
        controller.fetch().await;

        let deleted = controller.delete_item(&RecordId::new("a").unwrap()).await;

        assert!(!deleted);
        assert_eq!(controller.items(), rows(&["a", "b"]).as_slice());
        assert_eq!(source.calls.borrow().len(), 1);
        let notes = notices.take();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, AlertLevel::Error);
        assert_eq!(notes[0].message, "Failed to delete user. Please try again.");
    }

    #[tokio::test]
    async fn successful_delete_resynchronizes_current_page() {
        let source = FakeSource::with_pages(vec![Ok(ListResult::new(rows(&["b"]), 11))]);
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS)
            .with_query(ListQuery::new().page(2).search("x"));

        assert!(controller.delete_item(&RecordId::new("a").unwrap()).await);

        assert_eq!(
            source.mutations.borrow()[0],
            (RecordId::new("a").unwrap(), Mutation::Delete)
        );
        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page, 2);
        assert_eq!(controller.items(), rows(&["b"]).as_slice());
        assert_eq!(notices.take()[0].message, "User deleted successfully");
    }

    #[tokio::test]
    async fn status_toggle_refetches_once_with_same_query() {
        let source = FakeSource::with_pages(vec![
            Ok(ListResult::new(rows(&["a"]), 35)),
            Ok(ListResult::new(rows(&["a"]), 35)),
        ]);
        let session = session();
        let notices = Notifications::new();
        let query = ListQuery::new()
            .page(3)
            .search("jane")
            .status(Some(UserStatus::Active));
        let mut controller =
            ListController::new(&source, &session, &notices, LABELS).with_query(query.clone());
        controller.fetch().await;

        let updated = controller
            .mutate_status(&RecordId::new("a").unwrap(), "blocked".to_string())
            .await;

        assert!(updated);
        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], query);
        assert_eq!(notices.count(AlertLevel::Success), 1);
    }

    #[tokio::test]
    async fn page_beyond_total_is_clamped_and_refetched() {
        let source = FakeSource::with_pages(vec![
            Ok(ListResult::new(vec![], 15)),
            Ok(ListResult::new(rows(&["k"]), 15)),
        ]);
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS)
            .with_query(ListQuery::new().page(3));

        controller.fetch().await;

        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].page, 2);
        assert_eq!(controller.current_page(), 2);
        assert_eq!(controller.items(), rows(&["k"]).as_slice());
    }

    #[test]
    fn stale_response_is_discarded() {
        let source = FakeSource::default();
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS);

        let first = controller.begin_fetch();
        let second = controller.begin_fetch();
        assert!(second.generation() > first.generation());

        let applied = controller.finish_fetch(second, Ok(ListResult::new(rows(&["new"]), 1)));
        let stale = controller.finish_fetch(first, Ok(ListResult::new(rows(&["old"]), 1)));

        assert_eq!(applied, FetchOutcome::Applied);
        assert_eq!(stale, FetchOutcome::Stale);
        assert_eq!(controller.items(), rows(&["new"]).as_slice());
        assert!(!controller.is_loading());
    }

    #[test]
    fn loading_stays_set_until_latest_fetch_completes() {
        let source = FakeSource::default();
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS);

        let first = controller.begin_fetch();
        let _second = controller.begin_fetch();
        controller.finish_fetch(first, failure());

        assert!(controller.is_loading());
        assert!(notices.is_empty());
    }

    #[test]
    fn into_paginated_carries_window() {
        let source = FakeSource::default();
        let session = session();
        let notices = Notifications::new();
        let mut controller = ListController::new(&source, &session, &notices, LABELS)
            .with_query(ListQuery::new().page(7));
        let ticket = controller.begin_fetch();
        controller.finish_fetch(ticket, Ok(ListResult::new(rows(&["x"]), 120)));

        let paginated = controller.into_paginated();

        assert_eq!(paginated.page, 7);
        assert_eq!(paginated.total_pages, 12);
        assert_eq!(paginated.pages, vec![5, 6, 7, 8, 9]);
    }
}

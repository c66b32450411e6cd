//! Generic list workflows driven by [`ListController`].

use log::warn;

use crate::api::{ListSource, Mutation, MutationGateway};
use crate::domain::session::AdminSession;
use crate::domain::types::RecordId;
use crate::dto::listing::{ListPageData, ListParams, ListRedirect};
use crate::listing::StatusFilter;
use crate::listing::controller::{ListController, ListLabels};
use crate::listing::notify::{Notification, Notifications, Notifier};

/// Loads the page described by `params`.
pub async fn show_list<S>(
    source: &S,
    session: &AdminSession,
    labels: ListLabels,
    params: &ListParams,
) -> ListPageData<S::Item>
where
    S: ListSource,
{
    let notices = Notifications::new();
    let mut controller =
        ListController::new(source, session, &notices, labels).with_query(params.to_query());
    controller.fetch().await;
    into_page(controller, &notices)
}

/// Applies `mutation` to the record `raw_id` and reports where the browser
/// should land next.
///
/// A successful mutation resynchronizes through the controller, so the
/// returned parameters reflect any page clamp caused by a delete.
pub async fn mutate_list<S>(
    source: &S,
    session: &AdminSession,
    labels: ListLabels,
    params: &ListParams,
    raw_id: &str,
    mutation: Mutation<S::Status>,
) -> ListRedirect
where
    S: ListSource + MutationGateway,
{
    let id = match RecordId::new(raw_id) {
        Ok(id) => id,
        Err(err) => {
            warn!("Rejected {} id {raw_id:?}: {err}", labels.singular);
            let message = match mutation {
                Mutation::Delete => labels.delete_failed(),
                Mutation::UpdateStatus(_) => labels.status_failed(),
            };
            return rejected(params, message);
        }
    };

    let notices = Notifications::new();
    let mut controller =
        ListController::new(source, session, &notices, labels).with_query(params.to_query());

    match mutation {
        Mutation::Delete => controller.delete_item(&id).await,
        Mutation::UpdateStatus(status) => controller.mutate_status(&id, status).await,
    };

    ListRedirect {
        params: ListParams::from_query(controller.query()),
        notifications: notices.take(),
    }
}

/// Sends the browser back to `params` with a single error.
pub fn rejected(params: &ListParams, message: String) -> ListRedirect {
    ListRedirect {
        params: params.clone(),
        notifications: vec![Notification::error(message)],
    }
}

fn into_page<S, N>(controller: ListController<'_, S, N>, notices: &Notifications) -> ListPageData<S::Item>
where
    S: ListSource,
    N: Notifier,
{
    let search = controller.query().search.clone();
    let status = controller
        .query()
        .status
        .as_ref()
        .map(|status| status.filter_value().to_string());
    let loaded = controller.is_loaded();
    let list = controller.into_paginated();

    ListPageData {
        list,
        search,
        status,
        loaded,
        notifications: notices.take(),
    }
}

//! User administration workflows.

use crate::api::{ListSource, Mutation, MutationGateway};
use crate::domain::session::AdminSession;
use crate::domain::user::{ToggleActive, User, UserStatus};
use crate::dto::listing::{ListPageData, ListParams, ListRedirect};
use crate::listing::controller::ListLabels;
use crate::services::listing::{mutate_list, show_list};

pub const USER_LABELS: ListLabels = ListLabels {
    singular: "user",
    plural: "users",
};

pub async fn list_users<S>(source: &S, session: &AdminSession, params: &ListParams) -> ListPageData<User>
where
    S: ListSource<Item = User, Filter = UserStatus>,
{
    show_list(source, session, USER_LABELS, params).await
}

pub async fn delete_user<S>(
    source: &S,
    session: &AdminSession,
    params: &ListParams,
    user_id: &str,
) -> ListRedirect
where
    S: ListSource<Item = User, Filter = UserStatus> + MutationGateway<Status = ToggleActive>,
{
    mutate_list(source, session, USER_LABELS, params, user_id, Mutation::Delete).await
}

/// Flips the user between active and blocked.
pub async fn toggle_user<S>(
    source: &S,
    session: &AdminSession,
    params: &ListParams,
    user_id: &str,
) -> ListRedirect
where
    S: ListSource<Item = User, Filter = UserStatus> + MutationGateway<Status = ToggleActive>,
{
    mutate_list(
        source,
        session,
        USER_LABELS,
        params,
        user_id,
        Mutation::UpdateStatus(ToggleActive),
    )
    .await
}

//! Article moderation workflows.

use std::convert::Infallible;

use crate::api::{ListSource, Mutation, MutationGateway};
use crate::domain::article::Article;
use crate::domain::session::AdminSession;
use crate::dto::listing::{ListPageData, ListParams, ListRedirect};
use crate::listing::controller::ListLabels;
use crate::services::listing::{mutate_list, show_list};

pub const ARTICLE_LABELS: ListLabels = ListLabels {
    singular: "article",
    plural: "articles",
};

pub async fn list_articles<S>(
    source: &S,
    session: &AdminSession,
    params: &ListParams,
) -> ListPageData<Article>
where
    S: ListSource<Item = Article, Filter = Infallible>,
{
    show_list(source, session, ARTICLE_LABELS, params).await
}

pub async fn delete_article<S>(
    source: &S,
    session: &AdminSession,
    params: &ListParams,
    article_id: &str,
) -> ListRedirect
where
    S: ListSource<Item = Article, Filter = Infallible> + MutationGateway<Status = Infallible>,
{
    mutate_list(source, session, ARTICLE_LABELS, params, article_id, Mutation::Delete).await
}

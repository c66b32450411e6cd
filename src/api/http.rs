//! reqwest implementation of the backend capabilities.

use std::convert::Infallible;
use std::time::Duration;

use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{DashboardReader, FaqReader, FaqWriter, ListSource, Mutation, MutationGateway};
use crate::domain::article::Article;
use crate::domain::dashboard::{DashboardSummary, RevenuePoint, Transaction};
use crate::domain::faq::{Faq, NewFaq};
use crate::domain::product::{Product, ProductStatus};
use crate::domain::session::AdminSession;
use crate::domain::types::{RecordId, null_as_default};
use crate::domain::user::{ToggleActive, User, UserStatus};
use crate::listing::{ListQuery, ListResult, StatusFilter};

pub const DEFAULT_BASE_URL: &str = "https://mamun-reza-freeshops-backend.vercel.app";

const ADMIN_PREFIX: &str = "/api/v1/admin";
const FAQ_PREFIX: &str = "/api/v1/faq";

/// Client for the Freeshopps backend. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct FreeshoppsApi {
    client: Client,
    base_url: String,
}

impl FreeshoppsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Builds a client with an optional per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { api: self }
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi { api: self }
    }

    pub fn articles(&self) -> ArticlesApi<'_> {
        ArticlesApi { api: self }
    }

    pub fn faqs(&self) -> FaqsApi<'_> {
        FaqsApi { api: self }
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi { api: self }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn admin_url(&self, path: &str) -> String {
        self.url(&format!("{ADMIN_PREFIX}{path}"))
    }

    fn faq_url(&self, path: &str) -> String {
        self.url(&format!("{FAQ_PREFIX}{path}"))
    }

    fn get(&self, session: &AdminSession, url: &str) -> RequestBuilder {
        debug!("GET {url}");
        self.client.get(url).bearer_auth(session.token().as_str())
    }

    fn put(&self, session: &AdminSession, url: &str) -> RequestBuilder {
        debug!("PUT {url}");
        self.client.put(url).bearer_auth(session.token().as_str())
    }

    fn post(&self, session: &AdminSession, url: &str) -> RequestBuilder {
        debug!("POST {url}");
        self.client.post(url).bearer_auth(session.token().as_str())
    }

    fn delete(&self, session: &AdminSession, url: &str) -> RequestBuilder {
        debug!("DELETE {url}");
        self.client.delete(url).bearer_auth(session.token().as_str())
    }
}

/// Sends the request and maps the status code onto [`ApiError`].
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthenticated);
    }
    if !status.is_success() {
        return Err(ApiError::RequestFailed(format!("API returned error: {status}")));
    }
    Ok(response)
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    Ok(send(request).await?.json::<T>().await?)
}

async fn send_empty(request: RequestBuilder) -> ApiResult<()> {
    send(request).await.map(|_| ())
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ListEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    data: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
struct CountedList<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    data: Vec<T>,
    total_count: Option<usize>,
}

impl<T> CountedList<T> {
    fn into_result(self) -> ListResult<T> {
        let total_count = self.total_count.unwrap_or(self.data.len());
        ListResult::new(self.data, total_count)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserPage {
    #[serde(default, deserialize_with = "null_as_default")]
    docs: Vec<User>,
    total_docs: Option<usize>,
    total_pages: Option<usize>,
}

impl UserPage {
    fn into_result(self, page_size: usize) -> ListResult<User> {
        let total_count = self
            .total_docs
            .or(self.total_pages.map(|pages| pages * page_size))
            .unwrap_or(self.docs.len());
        ListResult::new(self.docs, total_count)
    }
}

fn page_params<F: StatusFilter>(
    query: &ListQuery<F>,
    search_key: &'static str,
    status_key: &'static str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.page_size.to_string()),
    ];
    if !query.search.is_empty() {
        params.push((search_key, query.search.clone()));
    }
    if let Some(status) = &query.status {
        params.push((status_key, status.filter_value().to_string()));
    }
    params
}

pub struct UsersApi<'a> {
    api: &'a FreeshoppsApi,
}

impl ListSource for UsersApi<'_> {
    type Item = User;
    type Filter = UserStatus;

    async fn fetch_page(
        &self,
        session: &AdminSession,
        query: &ListQuery<UserStatus>,
    ) -> ApiResult<ListResult<User>> {
        let url = self.api.admin_url("/getAllUsers");
        let request = self
            .api
            .get(session, &url)
            .query(&page_params(query, "keyword", "userStatus"));
        let envelope: DataEnvelope<UserPage> = send_json(request).await?;
        Ok(envelope.data.into_result(query.page_size))
    }
}

impl MutationGateway for UsersApi<'_> {
    type Status = ToggleActive;

    async fn mutate(
        &self,
        session: &AdminSession,
        id: &RecordId,
        mutation: &Mutation<ToggleActive>,
    ) -> ApiResult<()> {
        let request = match mutation {
            Mutation::Delete => {
                let url = self.api.admin_url(&format!("/deleteUser/{id}"));
                self.api.delete(session, &url)
            }
            Mutation::UpdateStatus(ToggleActive) => {
                let url = self.api.admin_url(&format!("/userActiveBlock/{id}"));
                self.api.put(session, &url)
            }
        };
        send_empty(request).await
    }
}

pub struct ProductsApi<'a> {
    api: &'a FreeshoppsApi,
}

impl ListSource for ProductsApi<'_> {
    type Item = Product;
    type Filter = ProductStatus;

    async fn fetch_page(
        &self,
        session: &AdminSession,
        query: &ListQuery<ProductStatus>,
    ) -> ApiResult<ListResult<Product>> {
        let url = self.api.admin_url("/allProductForAdmin");
        let request = self
            .api
            .get(session, &url)
            .query(&page_params(query, "search", "status"));
        let list: CountedList<Product> = send_json(request).await?;
        Ok(list.into_result())
    }
}

impl MutationGateway for ProductsApi<'_> {
    type Status = ProductStatus;

    async fn mutate(
        &self,
        session: &AdminSession,
        id: &RecordId,
        mutation: &Mutation<ProductStatus>,
    ) -> ApiResult<()> {
        let request = match mutation {
            Mutation::Delete => {
                let url = self.api.admin_url(&format!("/deleteProduct/{id}"));
                self.api.delete(session, &url)
            }
            Mutation::UpdateStatus(status) => {
                let url = self.api.admin_url(&format!("/updateProduct/{id}"));
                self.api
                    .put(session, &url)
                    .json(&json!({ "status": status.as_str() }))
            }
        };
        send_empty(request).await
    }
}

pub struct ArticlesApi<'a> {
    api: &'a FreeshoppsApi,
}

impl ListSource for ArticlesApi<'_> {
    type Item = Article;
    type Filter = Infallible;

    async fn fetch_page(
        &self,
        session: &AdminSession,
        query: &ListQuery<Infallible>,
    ) -> ApiResult<ListResult<Article>> {
        let url = self.api.admin_url("/Article/getArticle");
        let request = self
            .api
            .get(session, &url)
            .query(&page_params(query, "search", "status"));
        let list: CountedList<Article> = send_json(request).await?;
        Ok(list.into_result())
    }
}

impl MutationGateway for ArticlesApi<'_> {
    type Status = Infallible;

    async fn mutate(
        &self,
        session: &AdminSession,
        id: &RecordId,
        mutation: &Mutation<Infallible>,
    ) -> ApiResult<()> {
        match mutation {
            Mutation::Delete => {
                let url = self.api.admin_url(&format!("/Article/deleteArticle/{id}"));
                send_empty(self.api.delete(session, &url)).await
            }
            Mutation::UpdateStatus(never) => match *never {},
        }
    }
}

pub struct FaqsApi<'a> {
    api: &'a FreeshoppsApi,
}

impl FaqReader for FaqsApi<'_> {
    async fn list_faqs(&self) -> ApiResult<Vec<Faq>> {
        let url = self.api.faq_url("/all");
        debug!("GET {url}");
        let envelope: ListEnvelope<Faq> = send_json(self.api.client.get(&url)).await?;
        Ok(envelope.data)
    }
}

impl FaqWriter for FaqsApi<'_> {
    async fn add_faq(&self, session: &AdminSession, faq: &NewFaq) -> ApiResult<()> {
        let url = self.api.faq_url("/add");
        send_empty(self.api.post(session, &url).json(faq)).await
    }

    async fn update_faq(
        &self,
        session: &AdminSession,
        id: &RecordId,
        faq: &NewFaq,
    ) -> ApiResult<()> {
        let url = self.api.faq_url(&format!("/update/{id}"));
        send_empty(self.api.put(session, &url).json(faq)).await
    }

    async fn delete_faq(&self, session: &AdminSession, id: &RecordId) -> ApiResult<()> {
        let url = self.api.faq_url(&format!("/delete/{id}"));
        send_empty(self.api.delete(session, &url)).await
    }
}

pub struct DashboardApi<'a> {
    api: &'a FreeshoppsApi,
}

impl DashboardReader for DashboardApi<'_> {
    async fn summary(&self, session: &AdminSession) -> ApiResult<DashboardSummary> {
        let url = self.api.admin_url("/getDashboard");
        let envelope: DataEnvelope<DashboardSummary> =
            send_json(self.api.get(session, &url)).await?;
        Ok(envelope.data)
    }

    async fn revenue(&self, session: &AdminSession, year: i32) -> ApiResult<Vec<RevenuePoint>> {
        let url = self.api.admin_url("/getGraphData");
        let request = self
            .api
            .get(session, &url)
            .query(&[("filterType", "year".to_string()), ("value", year.to_string())]);
        let envelope: ListEnvelope<RevenuePoint> = send_json(request).await?;
        Ok(envelope.data)
    }

    async fn recent_transactions(&self, session: &AdminSession) -> ApiResult<Vec<Transaction>> {
        let url = self.api.admin_url("/getTransactions");
        let envelope: ListEnvelope<Transaction> = send_json(self.api.get(session, &url)).await?;
        Ok(envelope.data)
    }
}

use freeshopps_admin::api::errors::ApiError;
use freeshopps_admin::api::http::FreeshoppsApi;
use freeshopps_admin::api::{
    DashboardReader, FaqReader, FaqWriter, ListSource, Mutation, MutationGateway,
};
use freeshopps_admin::domain::faq::NewFaq;
use freeshopps_admin::domain::product::ProductStatus;
use freeshopps_admin::domain::session::{AdminProfile, AdminSession};
use freeshopps_admin::domain::types::{BearerToken, FaqText, RecordId};
use freeshopps_admin::domain::user::{ToggleActive, UserStatus};
use freeshopps_admin::listing::ListQuery;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session() -> AdminSession {
    AdminSession::new(
        BearerToken::new("secret-token").unwrap(),
        AdminProfile::default(),
    )
}

#[tokio::test]
async fn lists_users_with_bearer_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/getAllUsers"))
        .and(header("authorization", "Bearer secret-token"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("keyword", "jane"))
        .and(query_param("userStatus", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "docs": [
                    {"_id": "u1", "fullName": "Jane Doe", "email": "jane@example.com", "userStatus": "ACTIVE"}
                ],
                "totalDocs": 11,
                "totalPages": 2
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let query = ListQuery::new()
        .page(2)
        .search("jane")
        .status(Some(UserStatus::Active));

    let result = api.users().fetch_page(&session(), &query).await.unwrap();

    assert_eq!(result.total_count, 11);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].full_name, "Jane Doe");
    assert_eq!(result.items[0].user_status, UserStatus::Active);
}

#[tokio::test]
async fn products_without_total_count_fall_back_to_item_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/allProductForAdmin"))
        .and(query_param("status", "Pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"_id": "p1", "name": "Lamp", "price": 10, "status": "Pending"},
                {"_id": "p2", "name": "Desk", "price": 0, "status": "Pending", "isFree": true}
            ]
        })))
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let query = ListQuery::new().status(Some(ProductStatus::Pending));

    let result = api.products().fetch_page(&session(), &query).await.unwrap();

    assert_eq!(result.total_count, 2);
    assert!(result.items[1].is_free);
}

#[tokio::test]
async fn rejected_credential_maps_to_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/Article/getArticle"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let result = api.articles().fetch_page(&session(), &ListQuery::new()).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated)));
}

#[tokio::test]
async fn server_error_maps_to_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/admin/deleteUser/u1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let id = RecordId::new("u1").unwrap();
    let result = api.users().mutate(&session(), &id, &Mutation::Delete).await;

    assert!(matches!(result, Err(ApiError::RequestFailed(_))));
}

#[tokio::test]
async fn malformed_body_maps_to_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/getDashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let result = api.dashboard().summary(&session()).await;

    assert!(matches!(result, Err(ApiError::Unexpected(_))));
}

#[tokio::test]
async fn status_mutations_hit_their_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/admin/userActiveBlock/u7"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/admin/updateProduct/p3"))
        .and(body_json(json!({"status": "Rejected"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let session = session();

    api.users()
        .mutate(
            &session,
            &RecordId::new("u7").unwrap(),
            &Mutation::UpdateStatus(ToggleActive),
        )
        .await
        .unwrap();
    api.products()
        .mutate(
            &session,
            &RecordId::new("p3").unwrap(),
            &Mutation::UpdateStatus(ProductStatus::Rejected),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn faq_round_trip_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/faq/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"_id": "f1", "question": "Q?", "answer": "A."}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/faq/add"))
        .and(body_json(json!({"question": "New?", "answer": "Yes."})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/faq/update/f1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/faq/delete/f1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let session = session();
    let faq = NewFaq::new(FaqText::new("New?").unwrap(), FaqText::new("Yes.").unwrap());
    let id = RecordId::new("f1").unwrap();

    let faqs = api.faqs().list_faqs().await.unwrap();
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0].answer, "A.");

    api.faqs().add_faq(&session, &faq).await.unwrap();
    api.faqs().update_faq(&session, &id, &faq).await.unwrap();
    api.faqs().delete_faq(&session, &id).await.unwrap();
}

#[tokio::test]
async fn revenue_is_requested_for_the_given_year() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/getGraphData"))
        .and(query_param("filterType", "year"))
        .and(query_param("value", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"month": 1, "count": 120.5}, {"month": "Feb", "count": 80}]
        })))
        .mount(&server)
        .await;

    let api = FreeshoppsApi::new(server.uri());
    let points = api.dashboard().revenue(&session(), 2024).await.unwrap();

    assert_eq!(points[0].month, "1");
    assert_eq!(points[1].month, "Feb");
    assert_eq!(points[1].count, 80.0);
}

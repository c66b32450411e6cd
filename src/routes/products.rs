use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::http::FreeshoppsApi;
use crate::domain::session::AdminSession;
use crate::dto::listing::ListParams;
use crate::forms::products::ProductStatusForm;
use crate::routes::{redirect_to_list, render_list};
use crate::services::products as products_service;

#[get("/products")]
pub async fn show_products(
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = products_service::list_products(&api.products(), &session, &params).await;
    render_list(&tera, "products/index.html", &flash_messages, &session, "products", &data)
}

#[post("/products/{product_id}/delete")]
pub async fn delete_product(
    product_id: web::Path<String>,
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
) -> impl Responder {
    let outcome =
        products_service::delete_product(&api.products(), &session, &params, &product_id).await;
    redirect_to_list("/products", outcome)
}

#[post("/products/{product_id}/status")]
pub async fn update_product_status(
    product_id: web::Path<String>,
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
    web::Form(form): web::Form<ProductStatusForm>,
) -> impl Responder {
    let outcome = products_service::update_product_status(
        &api.products(),
        &session,
        &params,
        &product_id,
        form,
    )
    .await;
    redirect_to_list("/products", outcome)
}

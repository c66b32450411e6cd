use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::http::FreeshoppsApi;
use crate::domain::session::AdminSession;
use crate::dto::listing::ListParams;
use crate::routes::{redirect_to_list, render_list};
use crate::services::articles as articles_service;

#[get("/articles")]
pub async fn show_articles(
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = articles_service::list_articles(&api.articles(), &session, &params).await;
    render_list(&tera, "articles/index.html", &flash_messages, &session, "articles", &data)
}

#[post("/articles/{article_id}/delete")]
pub async fn delete_article(
    article_id: web::Path<String>,
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
) -> impl Responder {
    let outcome =
        articles_service::delete_article(&api.articles(), &session, &params, &article_id).await;
    redirect_to_list("/articles", outcome)
}

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::http::FreeshoppsApi;
use crate::domain::session::AdminSession;
use crate::dto::listing::ListParams;
use crate::routes::{redirect_to_list, render_list};
use crate::services::users as users_service;

#[get("/users")]
pub async fn show_users(
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = users_service::list_users(&api.users(), &session, &params).await;
    render_list(&tera, "users/index.html", &flash_messages, &session, "users", &data)
}

#[post("/users/{user_id}/delete")]
pub async fn delete_user(
    user_id: web::Path<String>,
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
) -> impl Responder {
    let outcome = users_service::delete_user(&api.users(), &session, &params, &user_id).await;
    redirect_to_list("/users", outcome)
}

#[post("/users/{user_id}/toggle")]
pub async fn toggle_user(
    user_id: web::Path<String>,
    session: AdminSession,
    params: web::Query<ListParams>,
    api: web::Data<FreeshoppsApi>,
) -> impl Responder {
    let outcome = users_service::toggle_user(&api.users(), &session, &params, &user_id).await;
    redirect_to_list("/users", outcome)
}

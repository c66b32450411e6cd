use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::http::FreeshoppsApi;
use crate::domain::session::AdminSession;
use crate::routes::{base_context, redirect, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/dashboard")
}

#[get("/dashboard")]
pub async fn show_dashboard(
    session: AdminSession,
    api: web::Data<FreeshoppsApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = dashboard_service::load_dashboard(&api.dashboard(), &session).await;

    let mut context =
        base_context(&flash_messages, &data.notifications, Some(&session), "dashboard");
    context.insert("summary", &data.summary);
    context.insert("revenue", &data.revenue);
    context.insert("transactions", &data.transactions);
    context.insert("year", &data.year);

    render_template(&tera, "dashboard/index.html", &context)
}

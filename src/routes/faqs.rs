use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::api::http::FreeshoppsApi;
use crate::domain::session::AdminSession;
use crate::dto::faqs::FaqQuery;
use crate::forms::faqs::FaqForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, faqs as faqs_service};

#[get("/faqs")]
pub async fn show_faqs(
    session: AdminSession,
    query: web::Query<FaqQuery>,
    api: web::Data<FreeshoppsApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = faqs_service::show_faqs(&api.faqs(), &query).await;

    let mut context = base_context(&flash_messages, &data.notifications, Some(&session), "faqs");
    context.insert("faqs", &data.faqs);
    context.insert("total", &data.total);
    context.insert("search", &data.search);

    render_template(&tera, "faqs/index.html", &context)
}

#[post("/faqs/add")]
pub async fn add_faq(
    session: AdminSession,
    api: web::Data<FreeshoppsApi>,
    web::Form(form): web::Form<FaqForm>,
) -> impl Responder {
    match faqs_service::add_faq(&api.faqs(), &session, form).await {
        Ok(()) => {
            FlashMessage::success("FAQ added successfully").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            error!("Failed to add FAQ: {err}");
            FlashMessage::error("Failed to add FAQ. Please try again.").send();
        }
    }
    redirect("/faqs")
}

#[post("/faqs/{faq_id}/update")]
pub async fn update_faq(
    faq_id: web::Path<String>,
    session: AdminSession,
    api: web::Data<FreeshoppsApi>,
    web::Form(form): web::Form<FaqForm>,
) -> impl Responder {
    match faqs_service::update_faq(&api.faqs(), &session, &faq_id, form).await {
        Ok(()) => {
            FlashMessage::success("FAQ updated successfully").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            error!("Failed to update FAQ {faq_id}: {err}");
            FlashMessage::error("Failed to update FAQ. Please try again.").send();
        }
    }
    redirect("/faqs")
}

#[post("/faqs/{faq_id}/delete")]
pub async fn delete_faq(
    faq_id: web::Path<String>,
    session: AdminSession,
    api: web::Data<FreeshoppsApi>,
) -> impl Responder {
    match faqs_service::delete_faq(&api.faqs(), &session, &faq_id).await {
        Ok(()) => {
            FlashMessage::success("FAQ deleted successfully").send();
        }
        Err(err) => {
            error!("Failed to delete FAQ {faq_id}: {err}");
            FlashMessage::error("Failed to delete FAQ. Please try again.").send();
        }
    }
    redirect("/faqs")
}

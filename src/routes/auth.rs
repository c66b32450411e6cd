use actix_identity::Identity;
use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::forms::auth::LoginForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};
use crate::session;

#[get("/login")]
pub async fn show_login(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, &[], None, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(req: HttpRequest, web::Form(form): web::Form<LoginForm>) -> impl Responder {
    let admin = match auth_service::login(form) {
        Ok(admin) => admin,
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            return redirect("/login");
        }
        Err(err) => {
            error!("Failed to sign in: {err}");
            FlashMessage::error("Failed to sign in. Please try again.").send();
            return redirect("/login");
        }
    };

    if let Err(err) = session::start(&req, &admin) {
        error!("Failed to store the admin session: {err}");
        FlashMessage::error("Failed to sign in. Please try again.").send();
        return redirect("/login");
    }

    FlashMessage::success(format!("Welcome, {}", admin.profile().full_name)).send();
    redirect("/dashboard")
}

#[post("/logout")]
pub async fn logout(req: HttpRequest, identity: Identity) -> impl Responder {
    session::end(&req, identity);
    redirect("/login")
}

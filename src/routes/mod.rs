//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use log::error;
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::session::AdminSession;
use crate::dto::listing::{ListPageData, ListParams, ListRedirect};
use crate::listing::notify::{AlertLevel, Notification};

pub mod articles;
pub mod auth;
pub mod dashboard;
pub mod faqs;
pub mod products;
pub mod users;

/// Maps a flash message level onto the CSS alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

#[derive(Debug, Serialize)]
struct Alert {
    message: String,
    level: &'static str,
}

/// Context every page starts from: pending alerts, the signed-in admin and
/// the active navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    notifications: &[Notification],
    session: Option<&AdminSession>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| Alert {
            message: f.content().to_string(),
            level: alert_level_to_str(&f.level()),
        })
        .chain(notifications.iter().map(|n| Alert {
            message: n.message.clone(),
            level: n.level.as_str(),
        }))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    if let Some(session) = session {
        context.insert("current_user", session.profile());
    }
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Location of the list at `path` showing the page described by `params`.
pub fn list_location(path: &str, params: &ListParams) -> String {
    match serde_html_form::to_string(params) {
        Ok(query) if !query.is_empty() => format!("{path}?{query}"),
        Ok(_) => path.to_string(),
        Err(err) => {
            error!("Failed to encode list parameters: {err}");
            path.to_string()
        }
    }
}

/// Flashes the notifications of a list mutation and sends the browser back
/// to the list.
pub fn redirect_to_list(path: &str, outcome: ListRedirect) -> HttpResponse {
    for notification in outcome.notifications {
        match notification.level {
            AlertLevel::Success => FlashMessage::success(notification.message).send(),
            AlertLevel::Error => FlashMessage::error(notification.message).send(),
        }
    }
    redirect(&list_location(path, &outcome.params))
}

/// Renders one of the paged list views.
pub fn render_list<T: Serialize>(
    tera: &Tera,
    template: &str,
    flash_messages: &IncomingFlashMessages,
    session: &AdminSession,
    current_page: &str,
    data: &ListPageData<T>,
) -> HttpResponse {
    let mut context = base_context(flash_messages, &data.notifications, Some(session), current_page);
    context.insert("list", &data.list);
    context.insert("search", &data.search);
    context.insert("status", &data.status.as_deref().unwrap_or("ALL"));
    context.insert("loaded", &data.loaded);
    render_template(tera, template, &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_levels_map_to_css_classes() {
        assert_eq!(alert_level_to_str(&Level::Error), "danger");
        assert_eq!(alert_level_to_str(&Level::Warning), "warning");
        assert_eq!(alert_level_to_str(&Level::Success), "success");
        assert_eq!(alert_level_to_str(&Level::Info), "info");
        assert_eq!(alert_level_to_str(&Level::Debug), "info");
    }

    #[test]
    fn list_location_keeps_page_search_and_filter() {
        let params = ListParams {
            page: Some(2),
            search: Some("jane doe".to_string()),
            status: Some("ACTIVE".to_string()),
        };
        assert_eq!(
            list_location("/users", &params),
            "/users?page=2&search=jane+doe&status=ACTIVE"
        );

        let params = ListParams {
            page: Some(1),
            ..ListParams::default()
        };
        assert_eq!(list_location("/articles", &params), "/articles?page=1");
        assert_eq!(list_location("/articles", &ListParams::default()), "/articles");
    }
}

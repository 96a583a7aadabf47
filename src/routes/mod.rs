//! HTTP handlers: the JSON API and the server-rendered pages.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Renders `template` with the given status, logging and hiding any
/// template error behind a bare 500.
pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

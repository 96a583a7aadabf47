use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::dto::api::AdvocateDto;
use crate::dto::pages::IndexQuery;
use crate::repository::DieselRepository;
use crate::routes::{render_template, render_template_with_status};
use crate::services::{ServiceError, advocates as advocates_service};

#[get("/")]
/// Advocates table with search box, rows-per-page selector and pager.
pub async fn show_index(
    params: web::Query<IndexQuery>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match advocates_service::load_index_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("current_page", "index");
            context.insert("advocates", &data.advocates);
            context.insert("meta", &data.meta);
            context.insert("showing_start", &data.showing_start);
            context.insert("showing_end", &data.showing_end);
            context.insert("page_sizes", &data.page_sizes);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/advocates/{id}")]
/// Profile page of one advocate.
pub async fn show_advocate_page(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "advocate");

    match advocates_service::get_advocate(repo.get_ref(), &id) {
        Ok(advocate) => {
            context.insert("advocate", &AdvocateDto::from(advocate));
            render_template(&tera, "advocates/show.html", &context)
        }
        Err(ServiceError::TypeConstraint(_) | ServiceError::NotFound) => {
            render_template_with_status(
                &tera,
                "advocates/not_found.html",
                &context,
                StatusCode::NOT_FOUND,
            )
        }
        Err(err) => {
            log::error!("Failed to load advocate page {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

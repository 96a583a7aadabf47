use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::{AdvocateDto, AdvocatesQuery, ApiError};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, advocates as advocates_service};

const INTERNAL_ERROR: &str = "Internal server error";

#[get("/advocates")]
/// Paginated, searchable list of advocates.
pub async fn list_advocates(
    params: web::Query<AdvocatesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match advocates_service::list_advocates(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to serve advocates list: {err}");
            HttpResponse::InternalServerError().json(ApiError::new(INTERNAL_ERROR))
        }
    }
}

#[get("/advocates/{id}")]
/// Single advocate by numeric id.
pub async fn show_advocate(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match advocates_service::get_advocate(repo.get_ref(), &id) {
        Ok(advocate) => HttpResponse::Ok().json(AdvocateDto::from(advocate)),
        Err(ServiceError::TypeConstraint(_)) => {
            HttpResponse::BadRequest().json(ApiError::new("Invalid id"))
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ApiError::new("Not found")),
        Err(err) => {
            log::error!("Failed to serve advocate {id}: {err}");
            HttpResponse::InternalServerError().json(ApiError::new(INTERNAL_ERROR))
        }
    }
}

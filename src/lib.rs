#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::api::{list_advocates, show_advocate};
#[cfg(feature = "server")]
use crate::routes::main::{show_advocate_page, show_index};

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;
pub mod seed;

#[cfg(feature = "server")]
pub mod browse;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod formatting;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Loads the templates and registers the display filters they use.
#[cfg(feature = "server")]
pub fn build_tera(templates_dir: &str) -> tera::Result<Tera> {
    let mut tera = Tera::new(templates_dir)?;
    tera.register_filter("list_preview", formatting::list_preview_filter);
    tera.register_filter("phone", formatting::phone_filter);
    Ok(tera)
}

/// Registers the JSON API under `/api` and the HTML pages at the root.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_advocates)
            .service(show_advocate),
    )
    .service(show_index)
    .service(show_advocate_page);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let tera = build_tera(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving advocate directory on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

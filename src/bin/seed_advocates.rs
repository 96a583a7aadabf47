//! Inserts the sample advocates into the configured database.
//!
//! The schema must already exist (`diesel migration run`).

use dotenvy::dotenv;

use advocate_directory::db::establish_connection_pool;
use advocate_directory::models::config::ServerConfig;
use advocate_directory::repository::DieselRepository;
use advocate_directory::seed::seed_advocates;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match seed_advocates(&repo) {
        Ok(inserted) => log::info!("Inserted {inserted} advocates"),
        Err(e) => {
            log::error!("Failed to seed advocates: {e}");
            std::process::exit(1);
        }
    }
}
